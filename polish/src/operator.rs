#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

pub fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '^')
}

// Anything that's not an operator ranks 0 so it never wins a comparison
// against a real operator (eg: an open paren sitting on the stack).
pub fn precedence(op: char) -> usize {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        '^' => 3,
        _ => 0,
    }
}

pub fn associativity(op: char) -> Assoc {
    match op {
        '^' => Assoc::Right,
        _ => Assoc::Left,
    }
}

/// Should `top`, sitting on the operator stack, be emitted before pushing
/// the incoming `op`? Higher binding wins, ties go to left-associative ops.
pub fn pops_before(top: char, op: char) -> bool {
    let (prec_top, prec_op) = (precedence(top), precedence(op));
    if prec_top > prec_op {
        true
    } else if prec_top < prec_op {
        false
    } else {
        is_operator(top) && associativity(op) == Assoc::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks() {
        assert!(precedence('^') > precedence('*'));
        assert_eq!(precedence('*'), precedence('/'));
        assert!(precedence('/') > precedence('-'));
        assert_eq!(precedence('+'), precedence('-'));
        assert_eq!(precedence('('), 0);
        assert_eq!(precedence('a'), 0);
    }

    #[test]
    fn assoc() {
        assert_eq!(associativity('^'), Assoc::Right);
        assert_eq!(associativity('-'), Assoc::Left);
        assert_eq!(associativity('x'), Assoc::Left);
        assert!("+-*/^".chars().all(is_operator));
        assert!(!is_operator('('));
        assert!(!is_operator('%'));
    }

    #[test]
    fn pop_order() {
        assert!(pops_before('*', '+'));
        assert!(pops_before('-', '+'));
        assert!(!pops_before('+', '*'));
        assert!(!pops_before('^', '^'));
        assert!(pops_before('^', '*'));
        assert!(!pops_before('(', '+'));
    }
}
