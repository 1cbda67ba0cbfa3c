//! Source writer: indentation-aware line buffer that plugins emit Java source into.

use crate::error::EmitError;
use crate::model::{Parameter, TypeName};

const INDENT: &str = "    ";

/// Declaration header for a method or constructor.
#[derive(Debug, Clone, Default)]
pub struct MethodDeclaration {
    pub modifiers: Vec<&'static str>,
    pub return_type: Option<TypeName>,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub varargs: bool,
}

impl MethodDeclaration {
    /// `public` constructor for `class_name`.
    pub fn constructor(class_name: impl Into<String>) -> Self {
        Self {
            modifiers: vec!["public"],
            name: class_name.into(),
            ..Self::default()
        }
    }

    /// `public` method.
    pub fn method(name: impl Into<String>, return_type: Option<TypeName>) -> Self {
        Self {
            modifiers: vec!["public"],
            return_type,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn modifiers(mut self, modifiers: &[&'static str]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    pub fn parameter(mut self, type_name: TypeName, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(type_name, name));
        self
    }

    pub fn parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Render the last parameter as `Type... name`.
    pub fn varargs(mut self) -> Self {
        self.varargs = true;
        self
    }

    fn header(&self) -> String {
        let mut header = String::new();
        for modifier in &self.modifiers {
            header.push_str(modifier);
            header.push(' ');
        }
        if let Some(return_type) = &self.return_type {
            header.push_str(&return_type.to_string());
            header.push(' ');
        }
        header.push_str(&self.name);
        let last = self.parameters.len().saturating_sub(1);
        let params: Vec<String> = self
            .parameters
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if self.varargs && i == last {
                    format!("{}... {}", p.type_name, p.name)
                } else {
                    format!("{} {}", p.type_name, p.name)
                }
            })
            .collect();
        header.push('(');
        header.push_str(&params.join(", "));
        header.push(')');
        header
    }
}

/// In-memory source buffer
#[derive(Debug, Default)]
pub struct SourceWriter {
    lines: Vec<String>,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation. Empty input writes a blank line.
    pub fn write_line(&mut self, line: &str) -> &mut Self {
        if line.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.depth), line));
        }
        self
    }

    pub fn blank_line(&mut self) -> &mut Self {
        self.write_line("")
    }

    pub fn write_comment(&mut self, comment: &str) -> &mut Self {
        self.write_line(&format!("// {}", comment))
    }

    pub fn write_annotation(&mut self, annotation: &TypeName) -> &mut Self {
        self.write_line(&format!("@{}", annotation))
    }

    /// Write `statement;`.
    pub fn write_statement(&mut self, statement: &str) -> &mut Self {
        self.write_line(&format!("{};", statement))
    }

    /// Write `header {` and indent.
    pub fn begin_block(&mut self, header: &str) -> &mut Self {
        self.write_line(&format!("{} {{", header));
        self.depth += 1;
        self
    }

    pub fn begin_method(&mut self, declaration: &MethodDeclaration) -> &mut Self {
        self.begin_block(&declaration.header())
    }

    /// Close the innermost block.
    pub fn end_block(&mut self) -> Result<&mut Self, EmitError> {
        if self.depth == 0 {
            return Err(EmitError::UnbalancedBlock);
        }
        self.depth -= 1;
        self.write_line("}");
        Ok(self)
    }

    /// Close the innermost block and follow it with a blank line.
    pub fn finish_method(&mut self) -> Result<&mut Self, EmitError> {
        self.end_block()?;
        Ok(self.blank_line())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Consume the writer into source text. Every block must be closed.
    pub fn finish(self) -> Result<String, EmitError> {
        if self.depth != 0 {
            return Err(EmitError::UnclosedBlocks(self.depth));
        }
        let mut source = self.lines.join("\n");
        source.push('\n');
        Ok(source)
    }
}
