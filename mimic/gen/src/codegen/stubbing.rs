//! Stubbing proxy generation.
//!
//! The stubbing proxy mirrors the mock member by member. Each accessor takes
//! matchers instead of values and registers a stub under the member's
//! canonical key, returning a handle to attach canned results to.

use mimic_define::Container;

use crate::codegen::generate_proxy;
use crate::config::GeneratorOptions;
use crate::naming::stubbing_proxy_name;
use crate::signature::{
    MethodSignature, matchable_generics, matchable_parameters_signature, parameter_matchers,
    tuple_type,
};

/// Generates the stubbing proxy of a container.
pub fn generate_stubbing_proxy(
    container: &Container,
    accessors: &[String],
    options: &GeneratorOptions,
) -> Vec<String> {
    generate_proxy(
        container,
        &stubbing_proxy_name(&container.name),
        "StubbingProxy",
        "StubbingHandler",
        accessors,
        options,
    )
}

/// Generates the stubbing accessor of a single member.
pub fn generate_stubbing_accessor(
    signature: &MethodSignature<'_>,
    options: &GeneratorOptions,
) -> Vec<String> {
    let parameters = signature.parameters();
    let (handle, entry_point) = if signature.is_throwing() {
        ("ToBeStubbedThrowingFunction", "stubThrowing")
    } else {
        ("ToBeStubbedFunction", "stub")
    };

    let mut output = vec![
        String::new(),
        "@warn_unused_result".to_string(),
        format!(
            "{} func {}{}({}) -> {}<({}), {}> {{",
            signature.accessibility().source_name(),
            signature.raw_name(),
            matchable_generics(parameters, options),
            matchable_parameters_signature(parameters, None),
            options.runtime(handle),
            tuple_type(parameters),
            signature.return_type()
        ),
    ];

    let mut call = format!("handler.{}(\"{}\"", entry_point, signature.key());
    if let Some(matchers) = parameter_matchers(parameters, options) {
        output.push(format!("{}{}", options.indentation, matchers));
        call.push_str(", parameterMatchers: matchers");
    }
    call.push(')');

    output.push(format!("{}return {}", options.indentation, call));
    output.push("}".to_string());
    output
}
