use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    Number {
        value: i64,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// "No expression could be built" placeholder. An ordinary owned node,
    /// not a shared sentinel: it is constructed freshly on each error path
    /// and dropped like any other node.
    Invalid,
}

/// An expression tree node. `valid` is computed bottom-up on construction
/// and never re-derived: a node is valid only if it parsed correctly and
/// every direct child is valid. The evaluator requires a valid root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub valid: bool,
}

impl Expr {
    pub fn number(value: i64) -> Self {
        Self {
            kind: ExprKind::Number { value },
            valid: true,
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        let valid = operand.valid;
        Self {
            kind: ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            valid,
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        let valid = lhs.valid && rhs.valid;
        Self {
            kind: ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            valid,
        }
    }

    pub fn invalid() -> Self {
        Self {
            kind: ExprKind::Invalid,
            valid: false,
        }
    }

    /// Forces the node invalid after construction. Used for a missing `)`
    /// and for trailing input after a complete expression, where the tree
    /// itself built fine but the surrounding syntax did not.
    pub fn mark_invalid(&mut self) {
        self.valid = false;
    }
}

// Deeply nested input builds deeply nested trees; the default recursive
// drop glue would exhaust the call stack on pathological depth. Children
// are detached onto an explicit work stack instead.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach_children(&mut self.kind, &mut stack);
        while let Some(mut node) = stack.pop() {
            detach_children(&mut node.kind, &mut stack);
        }
    }
}

fn detach_children(kind: &mut ExprKind, stack: &mut Vec<Box<Expr>>) {
    match mem::replace(kind, ExprKind::Invalid) {
        ExprKind::Unary { operand, .. } => stack.push(operand),
        ExprKind::Binary { lhs, rhs, .. } => {
            stack.push(lhs);
            stack.push(rhs);
        }
        ExprKind::Number { .. } | ExprKind::Invalid => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_compute_validity() {
        assert!(Expr::number(3).valid);
        assert!(Expr::unary(UnaryOp::Neg, Expr::number(3)).valid);
        assert!(Expr::binary(BinaryOp::Add, Expr::number(1), Expr::number(2)).valid);
        assert!(!Expr::invalid().valid);
    }

    #[test]
    fn invalidity_is_infectious() {
        let unary = Expr::unary(UnaryOp::Plus, Expr::invalid());
        assert!(!unary.valid);

        let binary = Expr::binary(BinaryOp::Mul, Expr::number(1), Expr::invalid());
        assert!(!binary.valid);

        // Once infected, wrapping in further valid nodes never recovers.
        let wrapped = Expr::binary(BinaryOp::Add, unary, Expr::number(2));
        assert!(!wrapped.valid);
    }

    #[test]
    fn mark_invalid_forces_the_flag() {
        let mut expr = Expr::binary(BinaryOp::Add, Expr::number(1), Expr::number(2));
        expr.mark_invalid();
        assert!(!expr.valid);
    }

    #[test]
    fn dropping_a_deep_tree_does_not_overflow_the_stack() {
        let mut expr = Expr::number(1);
        for _ in 0..500_000 {
            expr = Expr::unary(UnaryOp::Plus, expr);
        }
        drop(expr);
    }

    #[test]
    fn dropping_a_deep_binary_tree_does_not_overflow_the_stack() {
        let mut expr = Expr::number(0);
        for _ in 0..500_000 {
            expr = Expr::binary(BinaryOp::Add, expr, Expr::number(1));
        }
        drop(expr);
    }
}
