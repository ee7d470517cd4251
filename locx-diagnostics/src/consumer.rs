/// Sink for problems found while analyzing a build rule
///
/// Rule-level reports concern the rule as a whole; attribute-level reports
/// name the attribute whose value was being processed.
pub trait RuleErrorConsumer {
    fn rule_warning(&mut self, message: &str);

    fn rule_error(&mut self, message: &str);

    fn attribute_warning(&mut self, attr_name: &str, message: &str);

    fn attribute_error(&mut self, attr_name: &str, message: &str);

    /// Whether anything has been reported so far
    fn has_errors(&self) -> bool;
}

impl<C: RuleErrorConsumer + ?Sized> RuleErrorConsumer for &mut C {
    fn rule_warning(&mut self, message: &str) {
        (**self).rule_warning(message);
    }

    fn rule_error(&mut self, message: &str) {
        (**self).rule_error(message);
    }

    fn attribute_warning(&mut self, attr_name: &str, message: &str) {
        (**self).attribute_warning(attr_name, message);
    }

    fn attribute_error(&mut self, attr_name: &str, message: &str) {
        (**self).attribute_error(attr_name, message);
    }

    fn has_errors(&self) -> bool {
        (**self).has_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Lines(Vec<String>);

    impl RuleErrorConsumer for Lines {
        fn rule_warning(&mut self, message: &str) {
            self.0.push(format!("WARN: {}", message));
        }

        fn rule_error(&mut self, message: &str) {
            self.0.push(format!("ERROR: {}", message));
        }

        fn attribute_warning(&mut self, attr_name: &str, message: &str) {
            self.0.push(format!("WARN-{}: {}", attr_name, message));
        }

        fn attribute_error(&mut self, attr_name: &str, message: &str) {
            self.0.push(format!("ERROR-{}: {}", attr_name, message));
        }

        fn has_errors(&self) -> bool {
            !self.0.is_empty()
        }
    }

    fn report_through<C: RuleErrorConsumer>(mut consumer: C) {
        consumer.rule_error("boom");
        consumer.attribute_warning("cmd", "odd");
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut lines = Lines::default();
        report_through(&mut lines);

        assert!(lines.has_errors());
        assert_eq!(lines.0, vec!["ERROR: boom", "WARN-cmd: odd"]);
    }
}
