//! Names of generated types.
//!
//! The mock type and its two proxies are named after the original container.
//! The runtime's `MockManager` is parameterized by both proxy names, so the
//! three must be derived from the same container name.

/// Name of the generated mock type.
///
/// ```
/// use mimic_gen::naming::mock_type_name;
///
/// assert_eq!(mock_type_name("Greeter"), "MockGreeter");
/// ```
pub fn mock_type_name(original: &str) -> String {
    format!("Mock{}", original)
}

/// Name of the generated stubbing proxy.
pub fn stubbing_proxy_name(original: &str) -> String {
    format!("__StubbingProxy_{}", original)
}

/// Name of the generated verification proxy.
pub fn verification_proxy_name(original: &str) -> String {
    format!("__VerificationProxy_{}", original)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_derive_from_original() {
        assert_eq!(mock_type_name("Service"), "MockService");
        assert_eq!(stubbing_proxy_name("Service"), "__StubbingProxy_Service");
        assert_eq!(
            verification_proxy_name("Service"),
            "__VerificationProxy_Service"
        );
    }
}
