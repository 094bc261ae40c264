//! Library descriptor: the caller-supplied facts about the library being built.

use serde::{Deserialize, Deserializer, Serialize};

/// Template extension used when no HTML preprocessor is configured.
pub const DEFAULT_TEMPLATE_EXTENSION: &str = "html";

/// Name and HTML preprocessor of the library, usually read from `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryDescriptor {
    /// Library name, used as the entry key, the UMD global and the HTML title
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,

    /// Template preprocessor for the generated HTML page (e.g. "pug")
    #[serde(
        default,
        deserialize_with = "optional_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub html_preprocessor: Option<String>,
}

impl LibraryDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html_preprocessor: None,
        }
    }

    pub fn with_html_preprocessor(mut self, preprocessor: impl Into<String>) -> Self {
        self.html_preprocessor = Some(preprocessor.into());
        self
    }

    /// Extension of the HTML template source.
    ///
    /// Returns the configured preprocessor identifier, or
    /// [`DEFAULT_TEMPLATE_EXTENSION`] when it is absent or empty. The
    /// identifier is not checked against known preprocessors; an unsupported
    /// one shows up later as a missing template.
    ///
    /// ```
    /// use libpack_config::LibraryDescriptor;
    ///
    /// assert_eq!(LibraryDescriptor::new("kit").template_extension(), "html");
    /// assert_eq!(
    ///     LibraryDescriptor::new("kit").with_html_preprocessor("pug").template_extension(),
    ///     "pug"
    /// );
    /// ```
    pub fn template_extension(&self) -> &str {
        self.html_preprocessor
            .as_deref()
            .filter(|ext| !ext.is_empty())
            .unwrap_or(DEFAULT_TEMPLATE_EXTENSION)
    }
}

/// A string, or a number or boolean taken as its textual form.
///
/// Environment layers type their values, so `LIBPACK_NAME=2048` arrives as an
/// integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

pub(crate) fn optional_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}
