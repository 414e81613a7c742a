//! Code generation for mocks and their proxies.
//!
//! A single traversal walks the declaration tree and produces, per node, the
//! three artifacts side by side: the mock body, the stubbing accessor and the
//! verification accessor. Producing them together keeps the artifacts
//! aligned by construction; each member's [`MethodSignature`] is derived once
//! and shared by all three.
//!
//! ## Submodules
//!
//! - [`mock`] - The mock type and its member bodies
//! - [`stubbing`] - The stubbing proxy and its accessors
//! - [`verification`] - The verification proxy and its accessors
//!
//! ## Output Format
//!
//! Generators return lines without trailing newlines, relative to their own
//! nesting level. Nested content is indented with [`crate::output::indent`].

pub mod mock;
pub mod stubbing;
pub mod verification;

use mimic_define::{Container, Declaration, Member};
use tracing::debug;

pub use mock::{generate_mock_method, generate_mock_type};
pub use stubbing::{generate_stubbing_accessor, generate_stubbing_proxy};
pub use verification::{generate_verification_accessor, generate_verification_proxy};

use crate::config::GeneratorOptions;
use crate::errors::GeneratorError;
use crate::output::indent;
use crate::signature::MethodSignature;

/// The three synchronized outputs for one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifacts {
    /// Lines of the mock member or mock type.
    pub mock: Vec<String>,
    /// Lines of the stubbing accessor or stubbing proxy.
    pub stubbing: Vec<String>,
    /// Lines of the verification accessor or verification proxy.
    pub verification: Vec<String>,
}

impl Artifacts {
    /// Appends a member's artifacts.
    fn push_member(&mut self, member: Artifacts) {
        self.mock.extend(member.mock);
        self.stubbing.extend(member.stubbing);
        self.verification.extend(member.verification);
    }

    /// Appends a nested container's artifacts, separating the proxies.
    fn push_container(&mut self, nested: Artifacts) {
        self.mock.extend(nested.mock);
        self.stubbing.push(String::new());
        self.stubbing.extend(nested.stubbing);
        self.verification.push(String::new());
        self.verification.extend(nested.verification);
    }
}

/// Walks declaration trees and emits mock, stubbing and verification code.
///
/// ## Examples
///
/// ```
/// use mimic_define::{Accessibility, Container, Member, Parameter};
/// use mimic_gen::codegen::ArtifactGenerator;
/// use mimic_gen::config::GeneratorOptions;
///
/// let greeter = Container::protocol("Greeter", Accessibility::Public).with_child(
///     Member::new("greet(name:)", Accessibility::Public)
///         .returning("-> String")
///         .with_parameter(Parameter::new("name", "String")),
/// );
///
/// let options = GeneratorOptions::default();
/// let artifacts = ArtifactGenerator::new(&options)
///     .generate_container(&greeter)
///     .unwrap()
///     .unwrap();
/// assert!(artifacts.mock.iter().any(|l| l.contains("class MockGreeter")));
/// ```
pub struct ArtifactGenerator<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> ArtifactGenerator<'a> {
    /// Creates a generator with the given options.
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Generates the artifacts of a container and its whole subtree.
    ///
    /// Returns `Ok(None)` for private containers.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::MalformedContainer` for a container without a
    /// name and `GeneratorError::MalformedMember` for the first malformed
    /// member in the subtree. Nothing is emitted for the container then.
    pub fn generate_container(
        &self,
        container: &Container,
    ) -> Result<Option<Artifacts>, GeneratorError> {
        self.generate_nested(container, None)
    }

    /// Generates a container nested in `parent`, or a root one for `None`.
    fn generate_nested(
        &self,
        container: &Container,
        parent: Option<&str>,
    ) -> Result<Option<Artifacts>, GeneratorError> {
        if container.accessibility.is_private() {
            debug!(container = %container.name, "skipping private container");
            return Ok(None);
        }

        if container.name.trim().is_empty() {
            return Err(GeneratorError::malformed_container(
                &container.name,
                parent,
                "container has no name",
            ));
        }

        let mut children = Artifacts::default();
        for child in &container.children {
            match child {
                Declaration::Member(member) => {
                    if let Some(artifacts) = self.generate_member(member, &container.name)? {
                        children.push_member(artifacts);
                    }
                }
                Declaration::Container(nested) => {
                    if let Some(artifacts) = self.generate_nested(nested, Some(&container.name))? {
                        children.push_container(artifacts);
                    }
                }
            }
        }

        let stubbing = generate_stubbing_proxy(container, &children.stubbing, self.options);
        let verification =
            generate_verification_proxy(container, &children.verification, self.options);
        let mock = generate_mock_type(
            container,
            &children.mock,
            &stubbing,
            &verification,
            self.options,
        );

        Ok(Some(Artifacts {
            mock,
            stubbing,
            verification,
        }))
    }

    /// Generates the artifacts of one member of `container`.
    ///
    /// Returns `Ok(None)` for private members.
    pub fn generate_member(
        &self,
        member: &Member,
        container: &str,
    ) -> Result<Option<Artifacts>, GeneratorError> {
        if member.accessibility.is_private() {
            debug!(container, member = %member.name, "skipping private member");
            return Ok(None);
        }

        let signature = MethodSignature::of(member)
            .map_err(|e| GeneratorError::malformed_member(container, &member.name, e))?;

        Ok(Some(Artifacts {
            mock: generate_mock_method(&signature, self.options),
            stubbing: generate_stubbing_accessor(&signature, self.options),
            verification: generate_verification_accessor(&signature, self.options),
        }))
    }
}

/// Generates a proxy type holding a runtime handler.
///
/// Stubbing and verification proxies share this shape and differ only in
/// names.
pub(crate) fn generate_proxy(
    container: &Container,
    proxy_name: &str,
    conformance: &str,
    handler: &str,
    accessors: &[String],
    options: &GeneratorOptions,
) -> Vec<String> {
    let access = container.accessibility.source_name();
    let handler = options.runtime(handler);

    let mut body = vec![
        format!("let handler: {}", handler),
        String::new(),
        format!("{} init(handler: {}) {{", access, handler),
        format!("{}self.handler = handler", options.indentation),
        "}".to_string(),
    ];
    body.extend_from_slice(accessors);

    let mut output = vec![format!(
        "{} struct {}: {} {{",
        access,
        proxy_name,
        options.runtime(conformance)
    )];
    output.extend(indent(&body, &options.indentation));
    output.push("}".to_string());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_greeter, make_member, make_service, param, visible_member_count};
    use mimic_define::Accessibility;

    fn options() -> GeneratorOptions {
        GeneratorOptions::default()
    }

    fn count_matching(lines: &[String], needle: &str) -> usize {
        lines.iter().filter(|l| l.contains(needle)).count()
    }

    #[test]
    fn private_container_produces_nothing() {
        let container = Container::protocol("Hidden", Accessibility::Private)
            .with_child(make_member("run()", &[], ""));
        let result = ArtifactGenerator::new(&options())
            .generate_container(&container)
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn private_member_produces_nothing() {
        let member = Member::new("secret()", Accessibility::Private);
        let result = ArtifactGenerator::new(&options())
            .generate_member(&member, "Service")
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn artifacts_have_one_entry_per_visible_member() {
        let service = make_service();
        let options = options();
        let artifacts = ArtifactGenerator::new(&options)
            .generate_container(&service)
            .unwrap()
            .unwrap();

        let expected = visible_member_count(&service);
        assert_eq!(expected, 3);
        assert_eq!(count_matching(&artifacts.mock, "manager.call"), expected);
        assert_eq!(count_matching(&artifacts.stubbing, "return handler.stub"), expected);
        assert_eq!(
            count_matching(&artifacts.verification, "return handler.verify"),
            expected
        );
        assert!(!artifacts.mock.iter().any(|l| l.contains("secret")));
    }

    #[test]
    fn keys_agree_across_artifacts() {
        let options = options();
        let artifacts = ArtifactGenerator::new(&options)
            .generate_container(&make_greeter())
            .unwrap()
            .unwrap();

        let key = "\"greet(name:String) -> String\"";
        assert_eq!(count_matching(&artifacts.stubbing, key), 1);
        assert_eq!(count_matching(&artifacts.verification, key), 1);
        // The mock type nests both proxies after its own member.
        assert_eq!(count_matching(&artifacts.mock, key), 3);
    }

    #[test]
    fn nested_container_is_emitted_in_all_artifacts() {
        let outer = Container::class("Outer", Accessibility::Public)
            .with_child(make_member("run()", &[], ""))
            .with_child(
                Container::protocol("Inner", Accessibility::Public)
                    .with_child(make_member("ping(value:)", &[param("value", "Int")], "")),
            )
            .with_child(
                Container::protocol("Gone", Accessibility::Private)
                    .with_child(make_member("lost()", &[], "")),
            );

        let options = options();
        let artifacts = ArtifactGenerator::new(&options)
            .generate_container(&outer)
            .unwrap()
            .unwrap();

        assert_eq!(count_matching(&artifacts.mock, "class MockInner: Inner"), 1);
        assert_eq!(
            count_matching(&artifacts.stubbing, "struct __StubbingProxy_Inner"),
            1
        );
        assert_eq!(
            count_matching(&artifacts.verification, "struct __VerificationProxy_Inner"),
            1
        );
        assert!(!artifacts.mock.iter().any(|l| l.contains("Gone") || l.contains("lost")));
    }

    #[test]
    fn malformed_member_reports_container() {
        let container = Container::protocol("Broken", Accessibility::Public)
            .with_child(make_member("count", &[], "-> Int"));

        let err = ArtifactGenerator::new(&options())
            .generate_container(&container)
            .unwrap_err();

        match err {
            GeneratorError::MalformedMember {
                container, member, ..
            } => {
                assert_eq!(container, "Broken");
                assert_eq!(member, "count");
            }
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unnamed_container_is_rejected() {
        let container = Container::protocol(" ", Accessibility::Public);
        let err = ArtifactGenerator::new(&options())
            .generate_container(&container)
            .unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedContainer { parent: None, .. }));
    }

    #[test]
    fn unnamed_nested_container_names_its_parent() {
        let container = Container::protocol("Outer", Accessibility::Public)
            .with_child(Container::protocol("", Accessibility::Public));
        let err = ArtifactGenerator::new(&options())
            .generate_container(&container)
            .unwrap_err();

        match err {
            GeneratorError::MalformedContainer { parent, .. } => {
                assert_eq!(parent.as_deref(), Some("Outer"));
            }
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn proxy_indents_accessors_with_configured_prefix() {
        let container = Container::protocol("Greeter", Accessibility::Public);
        let options = GeneratorOptions::default().with_indent_width(2);
        let lines = generate_proxy(
            &container,
            "Proxy",
            "StubbingProxy",
            "StubbingHandler",
            &["x".to_string(), String::new()],
            &options,
        );
        assert!(lines.contains(&"  x".to_string()));
        assert_eq!(lines[lines.len() - 2], "");
    }
}
