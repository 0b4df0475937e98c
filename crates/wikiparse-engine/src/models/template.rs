use std::collections::BTreeMap;

/// Arguments of one template invocation, keyed by position or by name.
///
/// Positional keys are decimal strings (`"0"` is the template name for
/// anonymous templates); named keys come from `name=value` arguments.
pub type TemplateData = BTreeMap<String, String>;

/// Key under which a template's own name is stored.
pub const TEMPLATE_NAME_KEY: &str = "0";

/// Returns the template name recorded under [`TEMPLATE_NAME_KEY`].
pub fn template_name(data: &TemplateData) -> Option<&str> {
    data.get(TEMPLATE_NAME_KEY).map(String::as_str)
}
