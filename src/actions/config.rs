use crate::{
    actions::CliActionError,
    configuration::Configuration,
    format::{render_table, Formattable, FormattingError, OutputFormat},
};
use serde_json::json;

/// Resolved configuration as shown to the user, with the API key masked
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationView {
    pub api_key: String,
    pub base_url: String,
}

impl From<&Configuration> for ConfigurationView {
    fn from(configuration: &Configuration) -> Self {
        Self {
            api_key: configuration.masked_api_key(),
            base_url: configuration.base_url().to_string(),
        }
    }
}

impl Formattable for ConfigurationView {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Table => Ok(render_table(
                &["Setting".to_string(), "Value".to_string()],
                &[
                    vec!["API Key".to_string(), self.api_key.clone()],
                    vec!["Base URL".to_string(), self.base_url.clone()],
                ],
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "api_key": self.api_key,
                "base_url": self.base_url,
            }))?),
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(["API_KEY", "BASE_URL"])?;
                wtr.write_record([&self.api_key, &self.base_url])?;
                Ok(String::from_utf8(wtr.into_inner()?)?)
            }
        }
    }
}

pub fn show_configuration(configuration: &Configuration, format: &OutputFormat) -> Result<(), CliActionError> {
    println!("{}", ConfigurationView::from(configuration).format(format)?);
    Ok(())
}

pub fn print_configuration_path() -> Result<(), CliActionError> {
    let path = Configuration::get_default_configuration_file_path()?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_masks_api_key() {
        let configuration = Configuration::new("pt_secret_1234", "https://api.pagertree.com/api/v4").unwrap();
        let view = ConfigurationView::from(&configuration);
        assert_eq!(view.api_key, "**********1234");

        let output = view.format(&OutputFormat::Json).unwrap();
        assert!(!output.contains("pt_secret"));
        assert!(output.contains("\"base_url\": \"https://api.pagertree.com/api/v4\""));
    }
}
