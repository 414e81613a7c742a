//! Signature facts shared by the mock, stubbing and verification generators.
//!
//! Every piece of text that must agree across the three generated artifacts
//! is derived here and nowhere else. Types and return signatures are opaque
//! source text; all splitting of labels and arrows happens in this module.
//!
//! The central fact is the canonical key: labels paired with parameter types
//! followed by the return signature. The runtime joins recorded calls,
//! configured stubs and verification queries on this key, so a mismatch
//! between artifacts would only show up as a silent runtime failure.
//!
//! ## Examples
//!
//! ```
//! use mimic_define::{Accessibility, Member, Parameter};
//! use mimic_gen::signature::MethodSignature;
//!
//! let member = Member::new("greet(name:)", Accessibility::Public)
//!     .returning("-> String")
//!     .with_parameter(Parameter::new("name", "String"));
//!
//! let signature = MethodSignature::of(&member).unwrap();
//! assert_eq!(signature.raw_name(), "greet");
//! assert_eq!(signature.key(), "greet(name:String) -> String");
//! assert_eq!(signature.return_type(), "String");
//! assert!(!signature.is_throwing());
//! ```

use mimic_define::{Accessibility, Member, Parameter};
use tracing::debug;

use crate::config::GeneratorOptions;
use crate::errors::SignatureError;

/// Type used when a return signature names no return type.
pub const UNIT_TYPE: &str = "Void";

/// Separator placed before a non-empty return signature.
///
/// The return signature is trimmed and joined to the parameter list with this
/// separator, both in declarations and in canonical keys. `->String` and
/// ` -> String ` therefore keep their inner spacing but share the outer one,
/// so `f()->String` is keyed as `f() ->String`.
pub const RETURN_SEPARATOR: &str = " ";

/// Marker that classifies a member as error-propagating.
pub const THROWS_MARKER: &str = "throws";

/// Token separating the parameter list from the return type.
pub const RETURN_ARROW: &str = "->";

/// Origin parameters inserted into verification accessors.
pub const ORIGIN_PARAMETERS: &str = "__file: String = __FILE__, __line: UInt = __LINE__";

/// Origin arguments forwarded to the verify entry point.
pub const ORIGIN_ARGUMENTS: &str = "file: __file, line: __line";

/// All facts about one member, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature<'a> {
    member: &'a Member,
    raw_name: &'a str,
    key: String,
    throwing: bool,
    return_type: &'a str,
}

impl<'a> MethodSignature<'a> {
    /// Derives the signature facts of a member.
    ///
    /// ## Errors
    ///
    /// Returns a [`SignatureError`] when the name has no parameter list, when
    /// its label count differs from the parameter count, or when a parameter
    /// has no bound name.
    pub fn of(member: &'a Member) -> Result<Self, SignatureError> {
        let raw_name = raw_name(&member.name).ok_or_else(|| SignatureError::MissingParameterList {
            name: member.name.clone(),
        })?;

        let labels = member.name.matches(':').count();
        if labels != member.parameters.len() {
            return Err(SignatureError::LabelCountMismatch {
                name: member.name.clone(),
                labels,
                parameters: member.parameters.len(),
            });
        }

        if let Some(position) = member.parameters.iter().position(|p| p.name.trim().is_empty()) {
            return Err(SignatureError::EmptyParameterName {
                name: member.name.clone(),
                position,
            });
        }

        let return_type = match extract_return_type(&member.return_signature) {
            Some(return_type) => return_type,
            None => {
                if member.return_signature.contains(RETURN_ARROW) {
                    debug!(
                        member = %member.name,
                        signature = %member.return_signature,
                        "no return type after arrow, falling back to {}",
                        UNIT_TYPE
                    );
                }
                UNIT_TYPE
            }
        };

        Ok(Self {
            member,
            raw_name,
            key: canonical_key(&member.name, &member.parameters, &member.return_signature),
            throwing: is_throwing(&member.return_signature),
            return_type,
        })
    }

    /// The member this signature describes.
    pub fn member(&self) -> &'a Member {
        self.member
    }

    /// Name without the parameter list (`greet` for `greet(name:)`).
    pub fn raw_name(&self) -> &'a str {
        self.raw_name
    }

    /// The canonical key joining the three artifacts.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether calls to the member can propagate an error.
    pub fn is_throwing(&self) -> bool {
        self.throwing
    }

    /// Return type, or [`UNIT_TYPE`] when none can be extracted.
    pub fn return_type(&self) -> &'a str {
        self.return_type
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &'a [Parameter] {
        &self.member.parameters
    }

    /// Access level of the member.
    pub fn accessibility(&self) -> Accessibility {
        self.member.accessibility
    }

    /// Return signature with a separating space, or empty.
    pub fn return_suffix(&self) -> String {
        return_suffix(&self.member.return_signature)
    }

    /// `try ` when the member is error-propagating.
    pub fn try_prefix(&self) -> &'static str {
        if self.throwing { "try " } else { "" }
    }
}

/// Returns the member name up to the parameter list.
///
/// ```
/// use mimic_gen::signature::raw_name;
///
/// assert_eq!(raw_name("add(_:to:)"), Some("add"));
/// assert_eq!(raw_name("count"), None);
/// ```
pub fn raw_name(name: &str) -> Option<&str> {
    name.find('(').map(|idx| name[..idx].trim())
}

/// Builds the canonical key of a member.
///
/// Each label part of the name except the last is paired with the type of
/// the parameter at the same position. The pairs are joined with `, ` and
/// followed by the last label part and the return signature.
///
/// ```
/// use mimic_define::Parameter;
/// use mimic_gen::signature::canonical_key;
///
/// let params = [Parameter::new("a", "Int"), Parameter::new("b", "Int").with_label("b")];
/// assert_eq!(canonical_key("add(a:b:)", &params, "-> Int"), "add(a:Int, b:Int) -> Int");
/// assert_eq!(canonical_key("reset()", &[], ""), "reset()");
/// ```
pub fn canonical_key(name: &str, parameters: &[Parameter], return_signature: &str) -> String {
    let parts: Vec<&str> = name.split(':').collect();
    let (last, labels) = parts.split_last().unwrap_or((&"", &[]));

    let pairs = labels
        .iter()
        .zip(parameters)
        .map(|(label, param)| format!("{}:{}", label, param.type_name))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{}{}{}", pairs, last, return_suffix(return_signature))
}

/// Whether a return signature marks the member as error-propagating.
pub fn is_throwing(return_signature: &str) -> bool {
    return_signature.contains(THROWS_MARKER)
}

/// Extracts the return type following the arrow.
///
/// Returns `None` when there is no arrow or nothing follows it.
///
/// ```
/// use mimic_gen::signature::extract_return_type;
///
/// assert_eq!(extract_return_type(" throws -> [String] "), Some("[String]"));
/// assert_eq!(extract_return_type("-> (Int) -> Void"), Some("(Int) -> Void"));
/// assert_eq!(extract_return_type("throws"), None);
/// ```
pub fn extract_return_type(return_signature: &str) -> Option<&str> {
    let trimmed = return_signature.trim();
    let idx = trimmed.find(RETURN_ARROW)?;
    let return_type = trimmed[idx + RETURN_ARROW.len()..].trim();
    (!return_type.is_empty()).then_some(return_type)
}

/// Formats a return signature for appending after a parameter list.
///
/// Empty for an empty signature, otherwise [`RETURN_SEPARATOR`] followed by
/// the trimmed signature.
pub fn return_suffix(return_signature: &str) -> String {
    let trimmed = return_signature.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}{}", RETURN_SEPARATOR, trimmed)
    }
}

/// Declaration-site text for a parameter at `position`.
///
/// The first parameter has no external label unless one is given. Later
/// parameters use their name as label by default, so an equal label is
/// elided and a missing one is spelled `_`.
pub fn label_and_name(parameter: &Parameter, position: usize) -> String {
    match &parameter.label {
        Some(label) if position == 0 || *label != parameter.name => {
            format!("{} {}", label, parameter.name)
        }
        Some(_) => parameter.name.clone(),
        None if position == 0 => parameter.name.clone(),
        None => format!("_ {}", parameter.name),
    }
}

/// Declaration-site parameter list with original types.
pub fn parameters_signature(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}: {}", label_and_name(p, i), p.type_name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Call-site argument list pairing labels with the given values.
pub fn forwarding_call<S: AsRef<str>>(parameters: &[Parameter], values: &[S]) -> String {
    parameters
        .iter()
        .zip(values)
        .map(|(p, value)| match &p.label {
            Some(label) => format!("{}: {}", label, value.as_ref()),
            None => value.as_ref().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Call-site arguments forwarding every parameter by its bound name.
pub fn forwarding_arguments(parameters: &[Parameter]) -> String {
    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    forwarding_call(parameters, names.as_slice())
}

/// Arguments applied to the dispatch result; a single parameter is passed bare.
pub fn dispatch_arguments(parameters: &[Parameter]) -> String {
    match parameters {
        [single] => single.name.clone(),
        _ => forwarding_arguments(parameters),
    }
}

/// Expression recorded for one parameter.
///
/// Arguments that cannot be captured past the recorded call are replaced by
/// the runtime's placeholder.
pub fn recorded_value(parameter: &Parameter, options: &GeneratorOptions) -> String {
    if parameter.is_forwardable() {
        parameter.name.clone()
    } else {
        format!("{}()", options.runtime("markerFunction"))
    }
}

/// Payload passed to the call-recording entry point.
///
/// Returns `None` for members without parameters. A single parameter is
/// passed as a bare value rather than a one-element aggregate.
pub fn recorded_payload(parameters: &[Parameter], options: &GeneratorOptions) -> Option<String> {
    let values: Vec<String> = parameters
        .iter()
        .map(|p| recorded_value(p, options))
        .collect();

    match values.as_slice() {
        [] => None,
        [single] => Some(format!("({})", single)),
        _ => Some(format!("({})", forwarding_call(parameters, values.as_slice()))),
    }
}

/// Comma-joined parameter types (without parentheses).
pub fn tuple_type(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| p.type_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generic matcher placeholders `M1..Mn` bound to the parameter types.
///
/// Empty for members without parameters.
///
/// ```
/// use mimic_define::Parameter;
/// use mimic_gen::config::GeneratorOptions;
/// use mimic_gen::signature::matchable_generics;
///
/// let params = [Parameter::new("name", "String")];
/// assert_eq!(
///     matchable_generics(&params, &GeneratorOptions::default()),
///     "<M1: Cuckoo.Matchable where M1.MatchedType == (String)>"
/// );
/// ```
pub fn matchable_generics(parameters: &[Parameter], options: &GeneratorOptions) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let matchable = options.runtime("Matchable");
    let generics = (1..=parameters.len())
        .map(|i| format!("M{}: {}", i, matchable))
        .collect::<Vec<_>>()
        .join(", ");
    let constraints = parameters
        .iter()
        .enumerate()
        .map(|(i, p)| format!("M{}.MatchedType == ({})", i + 1, p.type_name))
        .collect::<Vec<_>>()
        .join(", ");

    format!("<{} where {}>", generics, constraints)
}

/// Formal parameters typed by matcher placeholders.
///
/// When `origin` is given it is appended, or inserted right before the last
/// parameter if that parameter is a closure so trailing-closure call sites
/// keep working.
pub fn matchable_parameters_signature(parameters: &[Parameter], origin: Option<&str>) -> String {
    let mut items: Vec<String> = parameters
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}: M{}", label_and_name(p, i), i + 1))
        .collect();

    if let Some(origin) = origin {
        match parameters.last() {
            Some(last) if last.is_closure() => items.insert(items.len() - 1, origin.to_string()),
            _ => items.push(origin.to_string()),
        }
    }

    items.join(", ")
}

/// Projection extracting one parameter's slot from the payload tuple.
fn slot_projection(position: usize, arity: usize) -> String {
    if arity == 1 {
        "$0".to_string()
    } else {
        format!("$0.{}", position)
    }
}

/// Declaration of the type-erased matcher array.
///
/// Returns `None` for members without parameters; the handler call then
/// omits the matchers argument.
pub fn parameter_matchers(parameters: &[Parameter], options: &GeneratorOptions) -> Option<String> {
    if parameters.is_empty() {
        return None;
    }

    let matchers = parameters
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "parameterMatcher({}.matcher) {{ {} }}",
                p.name,
                slot_projection(i, parameters.len())
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!(
        "let matchers: [{}<({})>] = [{}]",
        options.runtime("AnyMatcher"),
        tuple_type(parameters),
        matchers
    ))
}
