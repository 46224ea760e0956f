//! Prompt template engine.
//!
//! Templates are parsed once into a tree of segments:
//!
//! - `{{name}}` inserts the value of `name` (nothing when unset)
//! - `{{#if name}}...{{/if}}` keeps its body only when `name` is non-empty
//! - `{{#if name}}...{{else}}...{{/if}}` picks one of two bodies
//!
//! Conditionals may nest. Values are inserted verbatim, so braces inside a
//! value are never read as tags.

use std::collections::HashMap;

use super::error::PromptError;

const TAG_OPEN: &str = "{{";
const TAG_CLOSE: &str = "}}";
const IF_PREFIX: &str = "#if ";
const ELSE_TAG: &str = "else";
const ENDIF_TAG: &str = "/if";

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Variable(String),
    Conditional {
        variable: String,
        then: Vec<Segment>,
        otherwise: Vec<Segment>,
    },
}

/// A parsed prompt template.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

/// An `{{#if}}` block (or the template root) still being parsed.
struct OpenBlock {
    variable: Option<String>,
    then: Vec<Segment>,
    otherwise: Option<Vec<Segment>>,
}

impl OpenBlock {
    fn new(variable: Option<String>) -> Self {
        Self {
            variable,
            then: Vec::new(),
            otherwise: None,
        }
    }

    fn push(&mut self, segment: Segment) {
        match &mut self.otherwise {
            Some(otherwise) => otherwise.push(segment),
            None => self.then.push(segment),
        }
    }
}

fn innermost(blocks: &mut [OpenBlock]) -> Result<&mut OpenBlock, PromptError> {
    blocks
        .last_mut()
        .ok_or_else(|| PromptError::template("Unexpected {{/if}}"))
}

impl PromptTemplate {
    /// Parse template source.
    pub fn parse(source: &str) -> Result<Self, PromptError> {
        let mut blocks = vec![OpenBlock::new(None)];
        let mut rest = source;

        while let Some(open) = rest.find(TAG_OPEN) {
            let close = rest[open..]
                .find(TAG_CLOSE)
                .map(|pos| open + pos)
                .ok_or_else(|| PromptError::template(format!("Unclosed tag at {:?}", &rest[open..])))?;

            if open > 0 {
                innermost(&mut blocks)?.push(Segment::Text(rest[..open].to_string()));
            }

            let tag = rest[open + TAG_OPEN.len()..close].trim();
            if let Some(variable) = tag.strip_prefix(IF_PREFIX) {
                blocks.push(OpenBlock::new(Some(variable.trim().to_string())));
            } else if tag == ELSE_TAG {
                let block = innermost(&mut blocks)?;
                if block.variable.is_none() || block.otherwise.is_some() {
                    return Err(PromptError::template("Unexpected {{else}}"));
                }
                block.otherwise = Some(Vec::new());
            } else if tag == ENDIF_TAG {
                let closed = match blocks.pop() {
                    Some(OpenBlock {
                        variable: Some(variable),
                        then,
                        otherwise,
                    }) => Segment::Conditional {
                        variable,
                        then,
                        otherwise: otherwise.unwrap_or_default(),
                    },
                    _ => return Err(PromptError::template("Unexpected {{/if}}")),
                };
                innermost(&mut blocks)?.push(closed);
            } else {
                innermost(&mut blocks)?.push(Segment::Variable(tag.to_string()));
            }

            rest = &rest[close + TAG_CLOSE.len()..];
        }

        if !rest.is_empty() {
            innermost(&mut blocks)?.push(Segment::Text(rest.to_string()));
        }

        match blocks.pop() {
            Some(root) if blocks.is_empty() => Ok(Self {
                segments: root.then,
            }),
            _ => Err(PromptError::template("Missing {{/if}}")),
        }
    }

    /// Whether the template uses `variable`, as a placeholder or a condition.
    pub fn references(&self, variable: &str) -> bool {
        fn any(segments: &[Segment], variable: &str) -> bool {
            segments.iter().any(|segment| match segment {
                Segment::Text(_) => false,
                Segment::Variable(name) => name == variable,
                Segment::Conditional {
                    variable: name,
                    then,
                    otherwise,
                } => name == variable || any(then, variable) || any(otherwise, variable),
            })
        }
        any(&self.segments, variable)
    }

    /// Render with the given values.
    pub fn render(&self, values: &HashMap<String, String>) -> String {
        let mut output = String::new();
        render_into(&self.segments, values, &mut output);
        output
    }
}

fn render_into(segments: &[Segment], values: &HashMap<String, String>, output: &mut String) {
    for segment in segments {
        match segment {
            Segment::Text(text) => output.push_str(text),
            Segment::Variable(name) => {
                if let Some(value) = values.get(name) {
                    output.push_str(value);
                }
            }
            Segment::Conditional {
                variable,
                then,
                otherwise,
            } => {
                let is_set = values.get(variable).is_some_and(|value| !value.is_empty());
                render_into(if is_set { then } else { otherwise }, values, output);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn render(source: &str, pairs: &[(&str, &str)]) -> String {
        PromptTemplate::parse(source).unwrap().render(&values(pairs))
    }

    #[test]
    fn test_placeholder_substitution() {
        assert_eq!(render("Hello, {{ name }}!", &[("name", "World")]), "Hello, World!");
        assert_eq!(render("Hello, {{name}}!", &[]), "Hello, !");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(render("no tags here", &[]), "no tags here");
        assert_eq!(render("", &[]), "");
    }

    #[test]
    fn test_conditional_branches() {
        let source = "{{#if notes}}Notes: {{notes}}{{else}}Nothing.{{/if}}";

        assert_eq!(render(source, &[]), "Nothing.");
        assert_eq!(render(source, &[("notes", "")]), "Nothing.");
        assert_eq!(render(source, &[("notes", "a\nb")]), "Notes: a\nb");
    }

    #[test]
    fn test_conditional_without_else() {
        let source = "Hello{{#if name}}, {{name}}{{/if}}!";
        assert_eq!(render(source, &[]), "Hello!");
        assert_eq!(render(source, &[("name", "Ada")]), "Hello, Ada!");
    }

    #[test]
    fn test_nested_conditionals() {
        let source = "{{#if a}}A{{#if b}}B{{else}}-{{/if}}{{else}}none{{/if}}";
        assert_eq!(render(source, &[("a", "1"), ("b", "1")]), "AB");
        assert_eq!(render(source, &[("a", "1")]), "A-");
        assert_eq!(render(source, &[("b", "1")]), "none");
    }

    #[test]
    fn test_values_are_inserted_verbatim() {
        let rendered = render(
            "Notes: {{notes}}",
            &[("notes", "remember {{name}} and {{#if x}}")],
        );
        assert_eq!(rendered, "Notes: remember {{name}} and {{#if x}}");
    }

    #[test]
    fn test_malformed_templates_rejected() {
        for source in [
            "{{#if notes}}dangling",
            "stray {{/if}}",
            "{{else}}",
            "{{#if a}}x{{else}}y{{else}}z{{/if}}",
            "unclosed {{name",
        ] {
            let result = PromptTemplate::parse(source);
            assert!(
                matches!(result, Err(PromptError::TemplateError(_))),
                "{:?} should not parse",
                source
            );
        }
    }

    #[test]
    fn test_references() {
        let template = PromptTemplate::parse("{{#if notes}}x{{/if}}").unwrap();
        assert!(template.references("notes"));
        assert!(!template.references("name"));

        let template = PromptTemplate::parse("{{#if a}}Say {{name}}{{/if}}").unwrap();
        assert!(template.references("name"));
    }
}
