use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedScript {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Syntaxes tried in order until one parses.
fn syntaxes() -> [Syntax; 3] {
    [
        Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
        Syntax::Typescript(TsSyntax {
            decorators: true,
            ..Default::default()
        }),
        Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            ..Default::default()
        }),
    ]
}

/// Parses script source into a module, trying TSX, then TypeScript, then
/// JavaScript with JSX.
///
/// TypeScript generics such as `<T>(x: T) => x` are ambiguous with JSX, so a file
/// that fails as TSX gets a second chance as plain TypeScript.
pub fn parse_script_source(code: &str, file_path: &str) -> Result<ParsedScript> {
    use swc_common::GLOBALS;

    let source_map = Arc::new(SourceMap::default());
    GLOBALS.set(&Globals::new(), || {
        let mut last_error = None;
        for syntax in syntaxes() {
            let source_file = source_map.new_source_file(
                FileName::Real(file_path.into()).into(),
                code.to_string(),
            );
            let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
            match parser.parse_module() {
                Ok(module) => {
                    return Ok(ParsedScript {
                        module,
                        source_map: source_map.clone(),
                    });
                }
                Err(e) => last_error = Some(e),
            }
        }
        Err(anyhow!(
            "Failed to parse script {}: {:?}",
            file_path,
            last_error
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tsx() {
        let parsed = parse_script_source("const el = <div>Hello</div>;", "a.tsx").unwrap();
        assert_eq!(parsed.module.body.len(), 1);
    }

    #[test]
    fn test_falls_back_to_typescript_for_generic_arrows() {
        let parsed =
            parse_script_source("const id = <T,>(x: T) => x;\nconst y = <number>id(1);", "a.ts");
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_reports_unparseable_source() {
        assert!(parse_script_source("const = ;", "broken.js").is_err());
    }
}
