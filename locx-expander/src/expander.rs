// Location expander - substitutes registered placeholders in attribute values

use locx_diagnostics::RuleErrorConsumer;

use crate::error::Result;
use crate::registry::FunctionRegistry;
use crate::scanner::{scan, Segment};

/// Expands `$(name arg)` placeholders using a fixed function registry.
///
/// Problems are reported to the borrowed consumer; expansion itself never
/// fails from the caller's point of view. On an unterminated `$(` the input
/// comes back unchanged and exactly one error is reported.
pub struct LocationExpander<'c, C: RuleErrorConsumer + ?Sized> {
    consumer: &'c mut C,
    functions: FunctionRegistry,
}

impl<'c, C: RuleErrorConsumer + ?Sized> LocationExpander<'c, C> {
    pub fn new(consumer: &'c mut C, functions: FunctionRegistry) -> Self {
        Self {
            consumer,
            functions,
        }
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Expand `input`, reporting failures as rule-level errors
    pub fn expand(&mut self, input: &str) -> String {
        match self.try_expand(input) {
            Ok(expanded) => expanded,
            Err(err) => {
                self.consumer.rule_error(&err.to_string());
                input.to_string()
            }
        }
    }

    /// Expand the value of attribute `attr_name`, reporting failures against that attribute
    pub fn expand_attribute(&mut self, attr_name: &str, input: &str) -> String {
        match self.try_expand(input) {
            Ok(expanded) => expanded,
            Err(err) => {
                self.consumer.attribute_error(attr_name, &err.to_string());
                input.to_string()
            }
        }
    }

    /// Expand without reporting. Function output is never re-scanned.
    pub fn try_expand(&self, input: &str) -> Result<String> {
        let segments = scan(input)?;
        let mut output = String::with_capacity(input.len());

        for segment in &segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::EscapedDollar => output.push('$'),
                Segment::Placeholder(placeholder) => {
                    match self.functions.get(placeholder.name) {
                        Some(function) => {
                            log::trace!(
                                "expanding $({}) with arg {:?}",
                                placeholder.name,
                                placeholder.arg
                            );
                            output.push_str(&function(placeholder.arg));
                        }
                        // Not ours, leave the text alone
                        None => output.push_str(placeholder.raw),
                    }
                }
            }
        }

        Ok(output)
    }
}
