use super::Expr;

/// An iterator that traverses the tree in left-to-right post-order (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree in left-to-right post-order.
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current node off the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given node is the last visited node.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr: &'a Expr = *self.stack.last()?;
            let count = expr.child_count();
            let last_child = count.checked_sub(1).and_then(|index| expr.child(index));
            match last_child {
                Some(last_child) if !self.is_last_visited(last_child) => {
                    for index in (0..count).rev() {
                        if let Some(child) = expr.child(index) {
                            self.stack.push(child);
                        }
                    }
                },
                _ => return self.visit(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::build::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn post_order() {
        let expr = Expr::div(s("x") + c(1), Expr::neg(c(2)));
        let visited = expr.post_order_iter().map(Expr::to_string).collect::<Vec<_>>();
        assert_eq!(visited, vec!["x", "1", "x + 1", "2", "-2", "(x + 1)/-2"]);
    }
}
