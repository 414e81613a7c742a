//! Shared test utilities for mimic-gen tests.
//!
//! Fixture builders for declaration trees, so individual tests only spell
//! out what they actually exercise.

use mimic_define::{Accessibility, Container, Declaration, Member, Parameter, ParameterAttribute};

/// Creates an unlabeled parameter.
pub fn param(name: &str, type_name: &str) -> Parameter {
    Parameter::new(name, type_name)
}

/// Creates a labeled parameter.
pub fn labeled(label: &str, name: &str, type_name: &str) -> Parameter {
    Parameter::new(name, type_name).with_label(label)
}

/// Creates a closure parameter labeled with its own name.
pub fn closure_param(name: &str, type_name: &str, attributes: &[ParameterAttribute]) -> Parameter {
    attributes
        .iter()
        .fold(labeled(name, name, type_name), |p, attribute| {
            p.with_attribute(*attribute)
        })
}

/// Creates a public member.
pub fn make_member(name: &str, parameters: &[Parameter], return_signature: &str) -> Member {
    parameters.iter().cloned().fold(
        Member::new(name, Accessibility::Public).returning(return_signature),
        Member::with_parameter,
    )
}

/// The `Greeter` protocol with a single `greet(name:) -> String` member.
pub fn make_greeter() -> Container {
    Container::protocol("Greeter", Accessibility::Public).with_child(make_member(
        "greet(name:)",
        &[param("name", "String")],
        "-> String",
    ))
}

/// A class mixing overriding, throwing, private and closure members.
pub fn make_service() -> Container {
    Container::class("Service", Accessibility::Public)
        .with_child(make_member("reset()", &[], "").overriding())
        .with_child(make_member(
            "load(id:from:)",
            &[param("id", "Int"), labeled("from", "url", "URL")],
            "throws -> Data",
        ))
        .with_child(make_member(
            "perform(_:)",
            &[param("block", "() -> Void").with_attribute(ParameterAttribute::Noescape)],
            "",
        ))
        .with_child(Member::new("secret()", Accessibility::Private))
}

/// Counts non-private members of a container, ignoring nested containers.
pub fn visible_member_count(container: &Container) -> usize {
    container
        .children
        .iter()
        .filter(|child| matches!(child, Declaration::Member(m) if !m.accessibility.is_private()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_param_carries_attributes_and_label() {
        let p = closure_param("block", "() -> Void", &[ParameterAttribute::Noescape]);
        assert_eq!(p.label.as_deref(), Some("block"));
        assert!(p.has_attribute(ParameterAttribute::Noescape));
    }

    #[test]
    fn make_member_keeps_parameter_order() {
        let member = make_member("f(a:b:)", &[param("a", "Int"), param("b", "Int")], "");
        let names: Vec<_> = member.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn service_has_three_visible_members() {
        assert_eq!(visible_member_count(&make_service()), 3);
    }
}
