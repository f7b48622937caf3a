use super::require;
use crate::annotations::Marker;
use crate::error::Result;
use crate::queries::ancestors;
use crate::transpiler::{Transpiler, TranspilerStep};
use tsdart_common::diagnostics::diagnostic_messages;
use tsdart_syntax::{NodeFlags, NodeIndex, NodeList, SyntaxKind};

/// Variables, classes, interfaces and their members.
pub struct DeclarationTranslator;

impl TranspilerStep for DeclarationTranslator {
    fn visit_node(&self, t: &mut Transpiler<'_>, idx: NodeIndex) -> Result<()> {
        let arena = t.arena();
        let node = t.node(idx)?;
        match node.kind {
            SyntaxKind::VariableStatement => {
                let stmt = require(t, idx, arena.get_variable(node))?;
                t.visit(stmt.declaration_list)?;
                t.emit(";");
            }
            SyntaxKind::VariableDeclarationList => visit_declaration_list(t, idx)?,
            SyntaxKind::VariableDeclaration => {
                let decl = require(t, idx, arena.get_variable_declaration(node))?;
                t.visit(decl.name)?;
                if decl.initializer.is_some() {
                    t.emit("=");
                    t.visit(decl.initializer)?;
                }
            }
            SyntaxKind::ClassDeclaration | SyntaxKind::InterfaceDeclaration => {
                let class = require(t, idx, arena.get_class(node))?;
                visit_decorators(t, class.modifiers.as_ref())?;
                if node.kind == SyntaxKind::InterfaceDeclaration {
                    t.emit("abstract");
                }
                t.emit("class");
                t.visit(class.name)?;
                if let Some(params) = &class.type_parameters {
                    t.emit("<");
                    t.visit_list(params)?;
                    t.emit(">");
                }
                t.visit_each_if_present(class.heritage_clauses.as_ref())?;
                t.emit("{");
                t.visit_each(&class.members)?;
                t.emit("}");
            }
            SyntaxKind::HeritageClause => {
                let clause = require(t, idx, arena.get_heritage(node))?;
                let Some(keyword) = clause.token.token_text() else {
                    return Err(t.unimplemented(idx));
                };
                t.emit(keyword);
                t.visit_list(&clause.types)?;
            }
            SyntaxKind::PropertyDeclaration => {
                let prop = require(t, idx, arena.get_property_decl(node))?;
                visit_decorators(t, prop.modifiers.as_ref())?;
                let is_final = in_const_class(t, idx);
                emit_static(t, prop.modifiers.as_ref());
                if is_final {
                    t.emit("final");
                }
                if prop.type_annotation.is_some() {
                    t.visit(prop.type_annotation)?;
                } else if !is_final {
                    t.emit("var");
                }
                t.visit(prop.name)?;
                if prop.initializer.is_some() {
                    t.emit("=");
                    t.visit(prop.initializer)?;
                }
                t.emit(";");
            }
            SyntaxKind::Constructor => visit_constructor(t, idx)?,
            SyntaxKind::MethodDeclaration => {
                let method = require(t, idx, arena.get_method_decl(node))?;
                visit_decorators(t, method.modifiers.as_ref())?;
                emit_static(t, method.modifiers.as_ref());
                if method.type_annotation.is_some() {
                    t.visit(method.type_annotation)?;
                }
                t.visit(method.name)?;
                if let Some(params) = &method.type_parameters {
                    t.emit("<");
                    t.visit_list(params)?;
                    t.emit(">");
                }
                t.emit("(");
                t.visit_list(&method.parameters)?;
                t.emit(")");
                if method.body.is_some() {
                    t.visit(method.body)?;
                } else {
                    t.emit(";");
                }
            }
            SyntaxKind::Parameter => {
                let param = require(t, idx, arena.get_parameter(node))?;
                visit_decorators(t, param.modifiers.as_ref())?;
                if param.type_annotation.is_some() {
                    t.visit(param.type_annotation)?;
                }
                t.visit(param.name)?;
                if param.initializer.is_some() {
                    t.report_error(idx, "Parameter default values are not translated.");
                }
            }
            SyntaxKind::Decorator => {
                let name = Marker::from_decorator(arena, idx)
                    .and_then(|marker| marker.name(arena))
                    .unwrap_or_default();
                if name == "CONST" && marks_const_declaration(t, idx) {
                    return Ok(());
                }
                t.report_diagnostic(
                    idx,
                    &diagnostic_messages::DECORATOR_NOT_ALLOWED_HERE,
                    &[name.as_str()],
                );
            }
            _ => return Err(t.unimplemented(idx)),
        }
        Ok(())
    }
}

/// `final` for `const` lists; the first declaration's type replaces `var`.
fn visit_declaration_list(t: &mut Transpiler<'_>, idx: NodeIndex) -> Result<()> {
    let arena = t.arena();
    let node = t.node(idx)?;
    let list = require(t, idx, arena.get_variable_declaration_list(node))?;

    let is_final = t.has_flag(idx, NodeFlags::CONST);
    if is_final {
        t.emit("final");
    }
    let first_type = list
        .declarations
        .iter()
        .next()
        .and_then(|&first| arena.get(first))
        .and_then(|first| arena.get_variable_declaration(first))
        .map(|decl| decl.type_annotation)
        .filter(|ty| ty.is_some());
    match first_type {
        Some(ty) => t.visit(ty)?,
        None if !is_final => t.emit("var"),
        None => {}
    }
    t.visit_list(&list.declarations)
}

/// `[const] Name ( params ) body`. A const constructor must have an empty
/// body; one with statements is reported and translated as written.
fn visit_constructor(t: &mut Transpiler<'_>, idx: NodeIndex) -> Result<()> {
    let arena = t.arena();
    let node = t.node(idx)?;
    let ctor = require(t, idx, arena.get_constructor(node))?;
    visit_decorators(t, ctor.modifiers.as_ref())?;

    let Some(class_idx) = enclosing_class(t, idx) else {
        return Err(t.unimplemented(idx));
    };
    let class_name = t
        .node(class_idx)
        .ok()
        .and_then(|class| arena.get_class(class))
        .and_then(|class| arena.identifier_text(class.name));
    let Some(class_name) = class_name else {
        return Err(t.unimplemented(class_idx));
    };

    let is_const = t.is_const(class_idx);
    if is_const {
        t.emit("const");
    }
    t.emit(class_name);
    t.emit("(");
    t.visit_list(&ctor.parameters)?;
    t.emit(")");

    let body_is_empty = t
        .node(ctor.body)
        .ok()
        .and_then(|body| arena.get_block(body))
        .is_none_or(|block| block.statements.is_empty());
    if is_const && body_is_empty {
        t.emit(";");
        return Ok(());
    }
    if is_const {
        t.report_diagnostic(
            idx,
            &diagnostic_messages::CONST_CONSTRUCTOR_WITH_BODY,
            &[class_name],
        );
    }
    if ctor.body.is_some() {
        t.visit(ctor.body)
    } else {
        t.emit(";");
        Ok(())
    }
}

/// Nearest enclosing class or interface declaration.
fn enclosing_class(t: &Transpiler<'_>, idx: NodeIndex) -> Option<NodeIndex> {
    let arena = t.arena();
    ancestors(arena, idx).find(|&candidate| {
        arena
            .get(candidate)
            .is_some_and(|node| node.kind.is_class_like())
    })
}

/// Whether the member at `idx` belongs to a constant class.
fn in_const_class(t: &Transpiler<'_>, idx: NodeIndex) -> bool {
    enclosing_class(t, idx).is_some_and(|class_idx| t.is_const(class_idx))
}

/// Visit the decorators of a modifier list; keyword tokens are skipped.
fn visit_decorators(t: &mut Transpiler<'_>, modifiers: Option<&NodeList>) -> Result<()> {
    let Some(modifiers) = modifiers else {
        return Ok(());
    };
    let arena = t.arena();
    for &modifier in modifiers.iter() {
        if arena.get(modifier).is_some_and(|n| n.kind == SyntaxKind::Decorator) {
            t.visit(modifier)?;
        }
    }
    Ok(())
}

/// `CONST` is consumed by the class or constructor it decorates.
fn marks_const_declaration(t: &Transpiler<'_>, decorator: NodeIndex) -> bool {
    let arena = t.arena();
    arena
        .get(arena.parent(decorator))
        .is_some_and(|owner| owner.kind.is_class_like() || owner.kind == SyntaxKind::Constructor)
}

fn emit_static(t: &mut Transpiler<'_>, modifiers: Option<&NodeList>) {
    let arena = t.arena();
    let is_static = modifiers.is_some_and(|list| {
        list.iter()
            .any(|&m| arena.get(m).is_some_and(|n| n.kind == SyntaxKind::StaticKeyword))
    });
    if is_static {
        t.emit("static");
    }
}
