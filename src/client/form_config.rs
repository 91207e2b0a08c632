use serde::Deserialize;

/// Editor-configured attributes baked into the rendered form.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    #[serde(default)]
    pub heading: String,
    pub to_email: String,
    pub success_message: String,
    pub error_message: String,
}

impl FormConfig {
    /// Read the configuration from the `data-*` attributes of the rendered block.
    ///
    /// Unknown attributes are ignored, absent ones stay empty.
    pub fn from_data_attributes<'a>(
        heading: impl Into<String>,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut config = Self {
            heading: heading.into(),
            ..Default::default()
        };
        for (key, value) in attributes {
            match key {
                "data-to-email" => config.to_email = value.to_string(),
                "data-success-message" => config.success_message = value.to_string(),
                "data-error-message" => config.error_message = value.to_string(),
                _ => {}
            }
        }
        config
    }
}
