#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Local storage key holding the whole comment collection
    pub storage_key: String,

    /// Elements that each receive one post's comment section
    pub mount_selector: String,
    pub post_id_attribute: String,

    pub nav_link_selector: String,

    /// chrono strftime syntax
    pub timestamp_format: String,
    pub edited_label: String,

    pub messages: Messages,
}

impl Config {
    pub const DEFAULT_TIMESTAMP_FORMAT: &'static str = "%d/%m/%Y %H:%M:%S";

    pub fn from_json(json: &str) -> Result<Config, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            storage_key: String::from("blog-comments"),
            mount_selector: String::from("[data-comments-for]"),
            post_id_attribute: String::from("data-comments-for"),
            nav_link_selector: String::from(".nav-link"),
            timestamp_format: String::from(Config::DEFAULT_TIMESTAMP_FORMAT),
            edited_label: String::from("edited"),
            messages: Messages::default(),
        }
    }
}

/// Texts shown through the browser dialogs
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub empty_fields: String,
    pub confirm_delete: String,
    pub storage_failure: String,
}

impl Default for Messages {
    fn default() -> Messages {
        Messages {
            empty_fields: String::from("Please fill in both your name and your comment."),
            confirm_delete: String::from("Delete this comment?"),
            storage_failure: String::from(
                "Your comment could not be saved. The browser storage may be full.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let config = Config::from_json(
            r#"{
                "storageKey": "comentarios-v2",
                "editedLabel": "editado",
                "messages": { "confirmDelete": "Excluir este comentário?" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.storage_key, "comentarios-v2");
        assert_eq!(config.edited_label, "editado");
        assert_eq!(config.messages.confirm_delete, "Excluir este comentário?");
        assert_eq!(config.messages.empty_fields, Messages::default().empty_fields);
        assert_eq!(config.nav_link_selector, ".nav-link");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{\"storageKey\": 3}").is_err());
        assert!(Config::from_json("storageKey=x").is_err());
    }
}
