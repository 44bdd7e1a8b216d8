//! Field descriptors for the management console.
//!
//! The console renders each provider's settings from these descriptors and
//! hands edited values back as a flat string map.

use std::collections::HashMap;

use serde::Serialize;

use crate::settings::FtpSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Password,
    Checkbox,
}

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
    pub value: String,
}

fn checkbox(value: bool) -> String {
    if value {
        "1".to_owned()
    } else {
        String::new()
    }
}

/// Console descriptors for the provider's settings, current values included.
pub fn configuration_fields(settings: &FtpSettings) -> Vec<Field> {
    vec![
        Field {
            name: "enabled",
            kind: FieldKind::Checkbox,
            label: "Enable",
            help: None,
            value: checkbox(settings.enabled),
        },
        Field {
            name: "url",
            kind: FieldKind::Text,
            label: "URL",
            help: Some(
                "The URL to server with trailing slash. \
                 For example: ftp://ftp.example.com/ or ftps://ftp.example.com/folder/",
            ),
            value: settings.url.clone(),
        },
        Field {
            name: "port",
            kind: FieldKind::Text,
            label: "Port",
            help: Some("The port you use for logging into your FTP server"),
            value: settings.port.clone(),
        },
        Field {
            name: "user",
            kind: FieldKind::Text,
            label: "User Name",
            help: Some("The name you use for logging into your FTP server"),
            value: settings.user.clone(),
        },
        Field {
            name: "password",
            kind: FieldKind::Password,
            label: "Password",
            help: Some("The password for your FTP user"),
            value: settings.password.clone(),
        },
        Field {
            name: "password_encryption",
            kind: FieldKind::Password,
            label: "Encryption Password (Optional)",
            help: Some("A password to encrypt your configuration"),
            value: settings.password_encryption.clone(),
        },
        Field {
            name: "passive",
            kind: FieldKind::Checkbox,
            label: "Passive mode",
            help: Some("Active to enable passive mode"),
            value: checkbox(settings.passive),
        },
        Field {
            name: "ssl",
            kind: FieldKind::Checkbox,
            label: "TLS/SSL",
            help: Some("Active to enable TLS/SSL"),
            value: checkbox(settings.ssl),
        },
    ]
}

/// Applies console values onto a settings snapshot. Unknown keys are ignored.
pub fn apply_field_values(settings: &mut FtpSettings, values: &HashMap<String, String>) {
    for (key, value) in values {
        match key.as_str() {
            "enabled" => settings.enabled = truthy(value),
            "url" => settings.url = value.clone(),
            "port" => settings.port = value.clone(),
            "user" => settings.user = value.clone(),
            "password" => settings.password = value.clone(),
            "password_encryption" => settings.password_encryption = value.clone(),
            "passive" => settings.passive = truthy(value),
            "ssl" => settings.ssl = truthy(value),
            _ => (),
        }
    }
}

fn truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "on")
}

#[cfg(test)]
mod test_fields {
    use super::*;

    #[test]
    fn test_descriptors_cover_every_setting() {
        let settings = FtpSettings {
            enabled: true,
            url: "ftp://ftp.example.com/".to_owned(),
            port: "21".to_owned(),
            user: "backup".to_owned(),
            ..FtpSettings::default()
        };

        let fields = configuration_fields(&settings);
        let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "enabled",
                "url",
                "port",
                "user",
                "password",
                "password_encryption",
                "passive",
                "ssl"
            ]
        );

        assert_eq!(fields[0].value, "1");
        assert_eq!(fields[1].value, "ftp://ftp.example.com/");
        assert_eq!(fields[2].value, "21");
        assert_eq!(fields[3].value, "backup");
        // passive defaults on
        assert_eq!(fields[6].value, "1");
        assert_eq!(fields[7].value, "");
    }

    #[test]
    fn test_apply_field_values() {
        let mut settings = FtpSettings::default();
        let values = HashMap::from([
            ("enabled".to_owned(), "1".to_owned()),
            ("url".to_owned(), "ftps://ftp.example.com/".to_owned()),
            ("port".to_owned(), "990".to_owned()),
            ("passive".to_owned(), String::new()),
            ("ssl".to_owned(), "on".to_owned()),
            ("bogus".to_owned(), "ignored".to_owned()),
        ]);

        apply_field_values(&mut settings, &values);

        assert!(settings.enabled);
        assert_eq!(settings.url, "ftps://ftp.example.com/");
        assert_eq!(settings.port, "990");
        assert!(!settings.passive);
        assert!(settings.ssl);
    }
}
