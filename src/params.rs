use crate::{
    Aoe2NetResult,
    Error,
};

/// Overlay a caller-supplied bag of optional parameters onto an endpoint's defaults.
///
/// Every provided key must appear in `available`;
/// anything else fails with [`Error::UnexpectedParameter`] before a request is built.
/// Unspecified keys keep their default values.
pub(crate) fn merge_optional_params(
    provided: &[(&str, &str)],
    available: &[(&'static str, &'static str)],
) -> Aoe2NetResult<Vec<(&'static str, String)>> {
    let unexpected: Vec<String> = provided
        .iter()
        .filter(|(key, _)| !available.iter().any(|(name, _)| name == key))
        .map(|(key, _)| (*key).to_string())
        .collect();
    if !unexpected.is_empty() {
        tracing::debug!("rejecting unexpected optional parameter(s) {:?}", unexpected);
        return Err(Error::UnexpectedParameter {
            unexpected,
            available: available.iter().map(|(name, _)| *name).collect(),
        });
    }

    Ok(available
        .iter()
        .map(|(name, default)| {
            let value = provided
                .iter()
                .find(|(key, _)| key == name)
                .map_or(*default, |(_, value)| *value);
            (*name, value.to_string())
        })
        .collect())
}

/// `None` and the empty string both count as "not given".
pub(crate) fn is_absent(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
