// src/command/intake/nav.rs

//! Section stepping. All transitions are total: out-of-range moves are
//! no-ops, reported by a `false` return.

use crate::command::intake::types::{NavState, Step};
use crate::template::Section;

fn step_index(step: Step) -> usize {
    match step {
        Step::Section(s) => s.index(),
        Step::Finish => Section::ALL.len(),
    }
}

pub fn next(nav: &mut NavState) -> bool {
    let to = match nav.step {
        Step::Section(s) => match Section::ALL.get(s.index() + 1) {
            Some(n) => Step::Section(*n),
            None => Step::Finish,
        },
        Step::Finish => return false,
    };
    tracing::debug!(from = ?nav.step, to = ?to, "nav next");
    nav.step = to;
    true
}

pub fn previous(nav: &mut NavState) -> bool {
    let to = match nav.step {
        Step::Section(s) if s.index() == 0 => return false,
        Step::Section(s) => Step::Section(Section::ALL[s.index() - 1]),
        Step::Finish => Step::LAST_SECTION,
    };
    tracing::debug!(from = ?nav.step, to = ?to, "nav previous");
    nav.step = to;
    true
}

/// Sidebar selection; legal from any step to any step.
pub fn jump(nav: &mut NavState, target: Step) {
    if nav.step != target {
        tracing::debug!(from = ?nav.step, to = ?target, "nav jump");
    }
    nav.step = target;
}

pub fn can_go_back(nav: &NavState) -> bool {
    nav.step != Step::FIRST
}

pub fn can_go_forward(nav: &NavState) -> bool {
    nav.step != Step::Finish
}

/// 1-based position and total step count, finish included.
pub fn position(nav: &NavState) -> (usize, usize) {
    (step_index(nav.step) + 1, Section::ALL.len() + 1)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(step: Step) -> NavState {
        NavState { step }
    }

    #[test]
    fn starts_at_first_section() {
        assert_eq!(NavState::default().step, Step::Section(Section::Identification));
    }

    #[test]
    fn previous_at_first_section_is_noop() {
        let mut nav = NavState::default();
        assert!(!previous(&mut nav));
        assert_eq!(nav.step, Step::FIRST);
        assert!(!can_go_back(&nav));
    }

    #[test]
    fn next_walks_sections_in_order_then_finish() {
        let mut nav = NavState::default();
        let mut seen = vec![nav.step];
        while next(&mut nav) {
            seen.push(nav.step);
        }
        assert_eq!(seen, Step::all().to_vec());
    }

    #[test]
    fn next_from_last_section_enters_finish() {
        let mut nav = at(Step::LAST_SECTION);
        assert!(next(&mut nav));
        assert_eq!(nav.step, Step::Finish);
    }

    #[test]
    fn next_at_finish_is_noop() {
        let mut nav = at(Step::Finish);
        assert!(!next(&mut nav));
        assert_eq!(nav.step, Step::Finish);
        assert!(!can_go_forward(&nav));
    }

    #[test]
    fn previous_from_finish_returns_to_last_section() {
        let mut nav = at(Step::Finish);
        assert!(previous(&mut nav));
        assert_eq!(nav.step, Step::Section(Section::Family));
    }

    #[test]
    fn previous_steps_back_one_section() {
        let mut nav = at(Step::Section(Section::Social));
        assert!(previous(&mut nav));
        assert_eq!(nav.step, Step::Section(Section::Adulthood));
    }

    #[test]
    fn jump_is_legal_between_every_pair() {
        for from in Step::all() {
            for to in Step::all() {
                let mut nav = at(from);
                jump(&mut nav, to);
                assert_eq!(nav.step, to);
            }
        }
    }

    #[test]
    fn position_counts_finish() {
        assert_eq!(position(&NavState::default()), (1, 6));
        assert_eq!(position(&at(Step::Finish)), (6, 6));
    }
}
