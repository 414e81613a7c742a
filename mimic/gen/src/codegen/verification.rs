//! Verification proxy generation.
//!
//! Structurally identical to the stubbing proxy, except that accessors take
//! call-site origin parameters for diagnostics and return a wrapper around
//! the value the verified call would have returned.

use mimic_define::Container;

use crate::codegen::generate_proxy;
use crate::config::GeneratorOptions;
use crate::naming::verification_proxy_name;
use crate::signature::{
    MethodSignature, ORIGIN_ARGUMENTS, ORIGIN_PARAMETERS, matchable_generics,
    matchable_parameters_signature, parameter_matchers,
};

/// Generates the verification proxy of a container.
pub fn generate_verification_proxy(
    container: &Container,
    accessors: &[String],
    options: &GeneratorOptions,
) -> Vec<String> {
    generate_proxy(
        container,
        &verification_proxy_name(&container.name),
        "VerificationProxy",
        "VerificationHandler",
        accessors,
        options,
    )
}

/// Generates the verification accessor of a single member.
pub fn generate_verification_accessor(
    signature: &MethodSignature<'_>,
    options: &GeneratorOptions,
) -> Vec<String> {
    let parameters = signature.parameters();

    let mut output = vec![
        String::new(),
        format!(
            "{} func {}{}({}) -> {}<{}> {{",
            signature.accessibility().source_name(),
            signature.raw_name(),
            matchable_generics(parameters, options),
            matchable_parameters_signature(parameters, Some(ORIGIN_PARAMETERS)),
            options.runtime("__DoNotUse"),
            signature.return_type()
        ),
    ];

    let mut call = format!("handler.verify(\"{}\", {}", signature.key(), ORIGIN_ARGUMENTS);
    if let Some(matchers) = parameter_matchers(parameters, options) {
        output.push(format!("{}{}", options.indentation, matchers));
        call.push_str(", parameterMatchers: matchers");
    }
    call.push(')');

    output.push(format!("{}return {}", options.indentation, call));
    output.push("}".to_string());
    output
}
