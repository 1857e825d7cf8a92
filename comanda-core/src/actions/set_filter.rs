//! SetOrderFilter / SetUserFilter command handlers
//!
//! Filters only change what is visible. They never touch records and never
//! raise notifications.

use shared::intent::{OrderFilterDto, UserFilterDto};

use super::{CommandContext, CommandHandler, CommandOutcome};
use crate::core::BoardError;
use crate::filter::FilterCriteria;

/// SetOrderFilter action
#[derive(Debug, Clone)]
pub struct SetOrderFilterAction {
    pub filter: OrderFilterDto,
}

impl CommandHandler for SetOrderFilterAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        let criteria = FilterCriteria::from(&self.filter);
        let board = ctx.board_mut();
        board.set_order_filter(criteria);
        let shown = board.visible_orders().len();
        tracing::debug!(
            status = %self.filter.status,
            kind = %self.filter.kind,
            shown,
            "Order filter set"
        );
        Ok(CommandOutcome::new(format!("{shown} order(s) shown")))
    }
}

/// SetUserFilter action
#[derive(Debug, Clone)]
pub struct SetUserFilterAction {
    pub filter: UserFilterDto,
}

impl CommandHandler for SetUserFilterAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        let criteria = FilterCriteria::from(&self.filter);
        let board = ctx.board_mut();
        board.set_user_filter(criteria);
        let shown = board.visible_users().len();
        tracing::debug!(
            status = %self.filter.status,
            profile = %self.filter.profile,
            shown,
            "User filter set"
        );
        Ok(CommandOutcome::new(format!("{shown} user(s) shown")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Config};
    use shared::order::{KitchenOrder, OrderKind, OrderStatus};

    #[test]
    fn test_order_filter_scenario() {
        let mut board = Board::new(&Config::default());
        let mut started = KitchenOrder::new("#1", OrderKind::DineIn);
        started.status = OrderStatus::InProgress;
        board.upsert_order(started);
        board.upsert_order(KitchenOrder::new("#2", OrderKind::DineIn));

        let mut ctx = CommandContext::new(&mut board, 0);
        let outcome = SetOrderFilterAction {
            filter: OrderFilterDto {
                status: "InProgress".into(),
                kind: "all".into(),
            },
        }
        .execute(&mut ctx)
        .unwrap();
        assert_eq!(outcome.message, "1 order(s) shown");
        assert!(outcome.notices.is_empty());

        let visible: Vec<_> = board.visible_orders().into_iter().map(|o| o.id.as_str()).collect();
        assert_eq!(visible, vec!["#1"]);
        assert_eq!(board.orders().len(), 2);
    }
}
