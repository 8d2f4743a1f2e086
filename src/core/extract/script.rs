//! JavaScript and TypeScript sources, with or without JSX.

use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{
    AssignExpr, AssignTarget, BinExpr, BinaryOp, CallExpr, Callee, ClassProp, ExportAll, Expr,
    ExprStmt, ImportDecl, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement,
    JSXElementChild, JSXElementName, JSXExpr, JSXFragment, KeyValueProp, Lit, MemberExpr,
    MemberProp, NamedExport, NewExpr, Pat, PropName, SimpleAssignTarget, Str, SwitchCase,
    TaggedTpl, Tpl, TsEnumDecl, TsImportEqualsDecl, TsInterfaceDecl, TsModuleDecl, TsType,
    TsTypeAliasDecl, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::{
    Collector, DialectHint, ExtractOptions, Extractor,
    calls::{
        is_diagnostic_call, is_non_text_call, is_non_text_constructor, is_non_text_name,
        is_translation_call,
    },
    kind::{kind_for_attribute, kind_for_callee, kind_for_identifier, kind_for_tag},
    line_scan,
    markup::offer_text,
};
use crate::core::{
    data::{FileExtraction, Kind},
    parsers::script::parse_script_source,
    template::{decode_entities, placeholder_name},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptExtractor;

impl Extractor for ScriptExtractor {
    fn name(&self) -> &'static str {
        "script"
    }

    fn can_handle(&self, hint: &DialectHint) -> bool {
        hint.is_one_of(&["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"])
    }

    fn extract(&self, source: &str, options: &ExtractOptions) -> FileExtraction {
        let mut collector = Collector::new(options);
        extract_script(source, &mut collector);
        collector.finish()
    }
}

/// Extracts one script block, falling back to a line scan when it does not parse.
pub(crate) fn extract_script(source: &str, collector: &mut Collector) {
    let file_path = collector.options().file_path.to_string();
    match parse_script_source(source, &file_path) {
        Ok(parsed) => {
            let mut visitor = ScriptVisitor {
                source_map: &parsed.source_map,
                collector,
                contexts: Vec::new(),
            };
            parsed.module.visit_with(&mut visitor);
        }
        Err(_) => line_scan::extract_lines(source, collector),
    }
}

/// What the enclosing construct says about the strings below it.
#[derive(Debug, Default)]
struct Context {
    kind: Option<Kind>,
    parent: Option<String>,
    attribute: Option<String>,
}

struct ScriptVisitor<'v, 'c> {
    source_map: &'v SourceMap,
    collector: &'v mut Collector<'c>,
    contexts: Vec<Context>,
}

impl ScriptVisitor<'_, '_> {
    fn line(&self, pos: BytePos) -> usize {
        self.source_map.lookup_char_pos(pos).line
    }

    fn kind(&self) -> Kind {
        self.contexts
            .iter()
            .rev()
            .find_map(|c| c.kind)
            .unwrap_or(Kind::Text)
    }

    fn parent(&self) -> Option<String> {
        self.contexts.iter().rev().find_map(|c| c.parent.clone())
    }

    fn attribute(&self) -> Option<String> {
        self.contexts.iter().rev().find_map(|c| c.attribute.clone())
    }

    fn within(&mut self, context: Context, f: impl FnOnce(&mut Self)) {
        self.contexts.push(context);
        f(self);
        self.contexts.pop();
    }

    fn offer(&mut self, text: &str, has_placeholders: bool, pos: BytePos) {
        let line = self.line(pos);
        let kind = self.kind();
        let parent = self.parent();
        let attribute = self.attribute();
        offer_text(
            text,
            has_placeholders,
            kind,
            parent.as_deref(),
            attribute.as_deref(),
            line,
            self.collector,
        );
    }

    /// Visits a named binding's value with the kind its name implies.
    fn visit_named_value(&mut self, name: Option<String>, value: &impl VisitWith<Self>) {
        if name.as_deref().is_some_and(is_non_text_name) {
            return;
        }
        let context = Context {
            kind: name.as_deref().and_then(kind_for_identifier),
            parent: name,
            attribute: None,
        };
        self.within(context, |v| value.visit_with(v));
    }

    fn visit_jsx_attribute(&mut self, attr: &JSXAttr, tag: Option<&str>) {
        let name = match &attr.name {
            JSXAttrName::Ident(ident) => ident.sym.to_string(),
            JSXAttrName::JSXNamespacedName(ns) => format!("{}-{}", ns.ns.sym, ns.name.sym),
        };

        if !self.collector.options().checks_attribute(&name) {
            // Handlers can still show text, e.g. `onClick={() => toast("Saved")}`.
            if let Some(JSXAttrValue::JSXExprContainer(container)) = &attr.value
                && let JSXExpr::Expr(expr) = &container.expr
                && matches!(&**expr, Expr::Arrow(_) | Expr::Fn(_))
            {
                expr.visit_with(self);
            }
            return;
        }

        let context = Context {
            kind: kind_for_attribute(&name).or_else(|| tag.and_then(kind_for_tag)),
            parent: tag.map(str::to_string),
            attribute: Some(name),
        };
        self.within(context, |v| match &attr.value {
            Some(JSXAttrValue::Str(s)) => {
                if let Some(value) = s.value.as_str() {
                    v.offer(&decode_entities(value), false, s.span.lo);
                }
            }
            Some(JSXAttrValue::JSXExprContainer(container)) => {
                if let JSXExpr::Expr(expr) = &container.expr {
                    expr.visit_with(v);
                }
            }
            _ => {}
        });
    }

    /// Joins JSX text and simple `{value}` children into one run per sentence.
    fn visit_jsx_children(&mut self, children: &[JSXElementChild]) {
        let mut run = JsxRun::default();
        for child in children {
            match child {
                JSXElementChild::JSXText(text) => {
                    let raw: &str = &text.value;
                    if run.start.is_none() && !raw.trim().is_empty() {
                        let leading = raw.len() - raw.trim_start().len();
                        run.start = Some(text.span.lo + BytePos(leading as u32));
                    }
                    run.text.push_str(&decode_entities(raw));
                }
                JSXElementChild::JSXExprContainer(container) => match &container.expr {
                    JSXExpr::JSXEmptyExpr(_) => {}
                    JSXExpr::Expr(expr) if expr_path(expr).is_some() => {
                        run.start.get_or_insert(container.span.lo);
                        let name = placeholder_for(expr, run.placeholders);
                        run.text.push_str(&format!("{{{name}}}"));
                        run.placeholders += 1;
                    }
                    JSXExpr::Expr(expr) => {
                        self.flush_jsx_run(&mut run);
                        expr.visit_with(self);
                    }
                },
                other => {
                    self.flush_jsx_run(&mut run);
                    other.visit_with(self);
                }
            }
        }
        self.flush_jsx_run(&mut run);
    }

    fn flush_jsx_run(&mut self, run: &mut JsxRun) {
        let run = std::mem::take(run);
        if let Some(start) = run.start {
            self.offer(&run.text, run.placeholders > 0, start);
        }
    }
}

#[derive(Default)]
struct JsxRun {
    text: String,
    start: Option<BytePos>,
    placeholders: usize,
}

impl Visit for ScriptVisitor<'_, '_> {
    fn visit_import_decl(&mut self, _: &ImportDecl) {}

    fn visit_export_all(&mut self, _: &ExportAll) {}

    fn visit_named_export(&mut self, _: &NamedExport) {}

    fn visit_ts_import_equals_decl(&mut self, _: &TsImportEqualsDecl) {}

    fn visit_ts_type(&mut self, _: &TsType) {}

    fn visit_ts_enum_decl(&mut self, _: &TsEnumDecl) {}

    fn visit_ts_interface_decl(&mut self, _: &TsInterfaceDecl) {}

    fn visit_ts_type_alias_decl(&mut self, _: &TsTypeAliasDecl) {}

    fn visit_ts_module_decl(&mut self, _: &TsModuleDecl) {}

    fn visit_tagged_tpl(&mut self, _: &TaggedTpl) {}

    fn visit_prop_name(&mut self, _: &PropName) {}

    fn visit_expr_stmt(&mut self, node: &ExprStmt) {
        // Directives such as "use client".
        if matches!(&*node.expr, Expr::Lit(Lit::Str(_))) {
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_str(&mut self, node: &Str) {
        if let Some(value) = node.value.as_str() {
            self.offer(value, false, node.span.lo);
        }
    }

    fn visit_tpl(&mut self, node: &Tpl) {
        let mut text = String::new();
        for (i, quasi) in node.quasis.iter().enumerate() {
            match &quasi.cooked {
                Some(cooked) => text.push_str(cooked.as_str().unwrap_or_default()),
                None => text.push_str(&quasi.raw),
            }
            if let Some(expr) = node.exprs.get(i) {
                text.push('{');
                text.push_str(&placeholder_for(expr, i));
                text.push('}');
            }
        }
        self.offer(&text, !node.exprs.is_empty(), node.span.lo);
        node.exprs.visit_with(self);
    }

    fn visit_bin_expr(&mut self, node: &BinExpr) {
        if is_comparison(node.op) {
            for side in [&node.left, &node.right] {
                if !is_string_literal(side) {
                    side.visit_with(self);
                }
            }
            return;
        }

        if node.op == BinaryOp::Add {
            let mut parts = Vec::new();
            flatten_concatenation(node, &mut parts);
            if parts.iter().any(|p| matches!(p, Expr::Lit(Lit::Str(_)))) {
                let mut text = String::new();
                let mut placeholders = 0;
                for part in &parts {
                    match part {
                        Expr::Lit(Lit::Str(s)) => {
                            text.push_str(s.value.as_str().unwrap_or_default())
                        }
                        other => {
                            text.push('{');
                            text.push_str(&placeholder_for(other, placeholders));
                            text.push('}');
                            placeholders += 1;
                        }
                    }
                }
                self.offer(&text, placeholders > 0, node.span.lo);
                for part in parts {
                    if !matches!(part, Expr::Lit(Lit::Str(_))) {
                        part.visit_with(self);
                    }
                }
                return;
            }
        }

        node.visit_children_with(self);
    }

    fn visit_member_expr(&mut self, node: &MemberExpr) {
        node.obj.visit_with(self);
        if let MemberProp::Computed(computed) = &node.prop
            && !is_string_literal(&computed.expr)
        {
            computed.expr.visit_with(self);
        }
    }

    fn visit_switch_case(&mut self, node: &SwitchCase) {
        node.cons.visit_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        let path = match &node.callee {
            Callee::Expr(expr) => expr_path(expr),
            Callee::Import(_) => return,
            Callee::Super(_) => None,
        };
        if let Some(path) = &path
            && (is_translation_call(path) || is_diagnostic_call(path) || is_non_text_call(path))
        {
            return;
        }

        node.callee.visit_with(self);
        let context = Context {
            kind: path.as_deref().and_then(kind_for_callee),
            parent: path,
            attribute: None,
        };
        self.within(context, |v| node.args.visit_with(v));
    }

    fn visit_new_expr(&mut self, node: &NewExpr) {
        if expr_path(&node.callee).is_some_and(|path| is_non_text_constructor(&path)) {
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        node.name.visit_with(self);
        let name = match &node.name {
            Pat::Ident(binding) => Some(binding.id.sym.to_string()),
            _ => None,
        };
        self.visit_named_value(name, &node.init);
    }

    fn visit_key_value_prop(&mut self, node: &KeyValueProp) {
        self.visit_named_value(prop_name(&node.key), &node.value);
    }

    fn visit_class_prop(&mut self, node: &ClassProp) {
        self.visit_named_value(prop_name(&node.key), &node.value);
    }

    fn visit_assign_expr(&mut self, node: &AssignExpr) {
        let name = match &node.left {
            AssignTarget::Simple(SimpleAssignTarget::Ident(binding)) => {
                Some(binding.id.sym.to_string())
            }
            AssignTarget::Simple(SimpleAssignTarget::Member(member)) => match &member.prop {
                MemberProp::Ident(ident) => Some(ident.sym.to_string()),
                _ => None,
            },
            _ => None,
        };
        self.visit_named_value(name, &node.right);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        let tag = jsx_element_name(&node.opening.name);
        for attr in &node.opening.attrs {
            match attr {
                JSXAttrOrSpread::JSXAttr(attr) => self.visit_jsx_attribute(attr, tag.as_deref()),
                JSXAttrOrSpread::SpreadElement(spread) => spread.visit_with(self),
            }
        }

        if tag
            .as_deref()
            .is_some_and(|t| matches!(t, "style" | "script" | "code"))
        {
            return;
        }
        let context = Context {
            kind: tag.as_deref().and_then(kind_for_tag),
            parent: tag,
            attribute: None,
        };
        self.within(context, |v| v.visit_jsx_children(&node.children));
    }

    fn visit_jsx_fragment(&mut self, node: &JSXFragment) {
        self.visit_jsx_children(&node.children);
    }
}

/// Dotted path of a simple callee or member expression (`this.$t`, `toast.error`).
fn expr_path(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::This(_) => Some("this".to_string()),
        Expr::Paren(paren) => expr_path(&paren.expr),
        Expr::Member(member) => {
            let object = expr_path(&member.obj)?;
            match &member.prop {
                MemberProp::Ident(ident) => Some(format!("{object}.{}", ident.sym)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn placeholder_for(expr: &Expr, index: usize) -> String {
    match expr_path(expr) {
        Some(path) => placeholder_name(&path, index),
        None => index.to_string(),
    }
}

fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(str::to_string),
        _ => None,
    }
}

fn jsx_element_name(name: &JSXElementName) -> Option<String> {
    match name {
        JSXElementName::Ident(ident) => Some(ident.sym.to_string()),
        JSXElementName::JSXMemberExpr(member) => Some(member.prop.sym.to_string()),
        JSXElementName::JSXNamespacedName(ns) => Some(format!("{}:{}", ns.ns.sym, ns.name.sym)),
    }
}

fn is_comparison(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::EqEq
            | BinaryOp::NotEq
            | BinaryOp::EqEqEq
            | BinaryOp::NotEqEq
            | BinaryOp::In
            | BinaryOp::InstanceOf
    )
}

fn is_string_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Lit(Lit::Str(_)) => true,
        Expr::Tpl(tpl) => tpl.exprs.is_empty(),
        _ => false,
    }
}

fn flatten_concatenation<'e>(node: &'e BinExpr, out: &mut Vec<&'e Expr>) {
    for side in [&*node.left, &*node.right] {
        match side {
            Expr::Bin(inner) if inner.op == BinaryOp::Add => flatten_concatenation(inner, out),
            other => out.push(other),
        }
    }
}
