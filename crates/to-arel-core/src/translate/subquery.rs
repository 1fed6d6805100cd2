//! Sub-select handler.

use crate::arel::Node;
use crate::error::{Result, TranslateError};
use crate::node::codes::SubLinkType;
use crate::node::Attributes;

use super::{Context, Translator};

impl Translator {
    /// Only scalar sub-selects, `(SELECT ...)` used as a value, translate.
    /// EXISTS, ANY, ALL and the other sub-link types fail with their code.
    pub(super) fn handle_sub_link(&mut self, attrs: Attributes<'_>, _ctx: Context) -> Result<Node> {
        let code = attrs.code("subLinkType")?;
        match SubLinkType::from_code(code) {
            Some(SubLinkType::Expr) => self.translate(attrs.node("subselect")?, Context::new()),
            _ => Err(TranslateError::UnsupportedSubquery(code)),
        }
    }
}
