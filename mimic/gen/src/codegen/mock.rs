//! Mock type generation.
//!
//! The mock conforms to both the original type and the runtime's `Mock`
//! capability. Every member routes through the manager's call-recording
//! entry point; when the mock spies on a real instance, the manager can fall
//! back to the real member through the `original` closure.

use mimic_define::Container;

use crate::config::GeneratorOptions;
use crate::naming::{mock_type_name, stubbing_proxy_name, verification_proxy_name};
use crate::output::indent;
use crate::signature::{
    MethodSignature, dispatch_arguments, forwarding_arguments, parameters_signature,
    recorded_payload,
};

/// Generates the mock type of a container.
///
/// `members` are the already generated child bodies; `stubbing` and
/// `verification` are the container's proxy types, nested at the end of the
/// mock type.
pub fn generate_mock_type(
    container: &Container,
    members: &[String],
    stubbing: &[String],
    verification: &[String],
    options: &GeneratorOptions,
) -> Vec<String> {
    let name = &container.name;
    let access = container.accessibility.source_name();
    let override_init = if container.implementation {
        " override"
    } else {
        ""
    };

    let mut body = vec![
        format!(
            "{} let manager: {}<{}, {}> = {}()",
            access,
            options.runtime("MockManager"),
            stubbing_proxy_name(name),
            verification_proxy_name(name),
            options.runtime("MockManager")
        ),
        String::new(),
        format!("private let observed: {}?", name),
        String::new(),
        format!("{} required{} init() {{", access, override_init),
        format!("{}observed = nil", options.indentation),
        "}".to_string(),
        String::new(),
        format!("{} required init(spyOn victim: {}) {{", access, name),
        format!("{}observed = victim", options.indentation),
        "}".to_string(),
    ];
    body.extend_from_slice(members);
    body.push(String::new());
    body.extend_from_slice(stubbing);
    body.push(String::new());
    body.extend_from_slice(verification);

    let mut output = vec![
        String::new(),
        format!(
            "{} class {}: {}, {} {{",
            access,
            mock_type_name(name),
            name,
            options.runtime("Mock")
        ),
    ];
    output.extend(indent(&body, &options.indentation));
    output.push("}".to_string());
    output
}

/// Generates the mock body of a single member.
pub fn generate_mock_method(
    signature: &MethodSignature<'_>,
    options: &GeneratorOptions,
) -> Vec<String> {
    let member = signature.member();
    let override_modifier = if member.overriding { " override" } else { "" };

    vec![
        String::new(),
        format!(
            "{}{} func {}({}){} {{",
            signature.accessibility().source_name(),
            override_modifier,
            signature.raw_name(),
            parameters_signature(signature.parameters()),
            signature.return_suffix()
        ),
        format!(
            "{}return {}",
            options.indentation,
            dispatch_call(signature, options)
        ),
        "}".to_string(),
    ]
}

/// Builds the call into the manager's recording entry point.
///
/// The recorded payload replaces non-forwardable closures with the runtime
/// placeholder, while the spy fallback forwards the real arguments.
fn dispatch_call(signature: &MethodSignature<'_>, options: &GeneratorOptions) -> String {
    let parameters = signature.parameters();
    let entry_point = if signature.is_throwing() {
        "callThrows"
    } else {
        "call"
    };

    let mut call = format!(
        "{}manager.{}(\"{}\"",
        signature.try_prefix(),
        entry_point,
        signature.key()
    );
    if let Some(payload) = recorded_payload(parameters, options) {
        call.push_str(&format!(", parameters: {}", payload));
    }
    call.push_str(&format!(
        ", original: observed.map {{ o in return {{ ({}){} in {}o.{}({}) }} }})",
        parameters_signature(parameters),
        signature.return_suffix(),
        signature.try_prefix(),
        signature.raw_name(),
        forwarding_arguments(parameters)
    ));
    call.push_str(&format!("({})", dispatch_arguments(parameters)));
    call
}
