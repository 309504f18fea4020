//! Load-type command handler.

use std::io::Write;

use anyhow::Result;

use crate::{CliContext, CliError};

/// Load `qualified_name` and print it with the provider that defined it.
pub fn execute(ctx: &CliContext, qualified_name: &str, out: &mut dyn Write) -> Result<()> {
    let handle = ctx
        .resolver
        .load_type(qualified_name, &ctx.caller)
        .map_err(CliError::from)?;
    let defined_by = handle
        .defining_provider()
        .map_or_else(|| "builtin".to_string(), |provider| provider.identity());
    writeln!(out, "{handle}\t{defined_by}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap;
    use crate::handlers::test_support::{Fixture, output};

    #[test]
    fn type_defined_by_caller_names_caller() {
        let fixture = Fixture::new();
        Fixture::write(fixture.caller.path(), "app/Main.type", "");

        let mut buf = Vec::new();
        execute(&fixture.context(), "app::Main", &mut buf).unwrap();
        let printed = output(buf);
        assert!(printed.starts_with("app::Main\tcaller["));
    }

    #[test]
    fn builtin_types_win_over_module() {
        let fixture = Fixture::new();
        Fixture::write(fixture.module.path(), "core/Text.type", "");
        let config = crate::CliConfig {
            builtin_types: vec!["core::Text".to_string()],
            ..fixture.config()
        };

        let mut buf = Vec::new();
        execute(&bootstrap(&config).unwrap(), "core::Text", &mut buf).unwrap();
        assert_eq!(output(buf), "core::Text\tbuiltin\n");
    }

    #[test]
    fn missing_type_is_not_found() {
        let fixture = Fixture::new();
        let err = execute(&fixture.context(), "app::Main", &mut Vec::new()).unwrap_err();
        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 1);
    }

    #[test]
    fn malformed_name_is_a_load_error() {
        let fixture = Fixture::new();
        let err = execute(&fixture.context(), "app::::Main", &mut Vec::new()).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Load(_))));
    }
}
