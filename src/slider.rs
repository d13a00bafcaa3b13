//! Testimonial slider state machine.
//!
//! The controller owns the current slide index and the frame that is drawn
//! from it (one horizontal offset per slide plus the active dot). Every
//! transition re-renders the frame before returning, so the two never
//! disagree.

use std::rc::Rc;
use yew::Reducible;

use crate::error::PageError;

/// What the view draws: `offsets[i]` is slide `i`'s translateX in percent.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideFrame {
    pub offsets: Vec<i64>,
    pub active_dot: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    current: usize,
    count: usize,
    frame: SlideFrame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderAction {
    Next,
    Previous,
    JumpTo(usize),
}

impl SliderAction {
    /// Arrow keys drive the slider; everything else is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(SliderAction::Next),
            "ArrowLeft" => Some(SliderAction::Previous),
            _ => None,
        }
    }
}

impl Slider {
    pub fn new(count: usize) -> Result<Self, PageError> {
        if count == 0 {
            return Err(PageError::EmptySlider);
        }
        let mut slider = Slider {
            current: 0,
            count,
            frame: SlideFrame {
                offsets: vec![0; count],
                active_dot: 0,
            },
        };
        slider.go_to_slide(0);
        Ok(slider)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn frame(&self) -> &SlideFrame {
        &self.frame
    }

    /// Redraws the frame around `target`.
    ///
    /// `target` must be below the slide count. Only the transitions below
    /// call this, right after moving `current`, and they always pass a
    /// valid index.
    fn go_to_slide(&mut self, target: usize) {
        debug_assert!(target < self.count, "slide {} out of {}", target, self.count);
        for (i, offset) in self.frame.offsets.iter_mut().enumerate() {
            *offset = (i as i64 - target as i64) * 100;
        }
        self.frame.active_dot = target;
    }

    pub fn next(&mut self) {
        if self.current == self.count - 1 {
            self.current = 0;
        } else {
            self.current += 1;
        }
        self.go_to_slide(self.current);
    }

    pub fn previous(&mut self) {
        if self.current == 0 {
            self.current = self.count - 1;
        } else {
            self.current -= 1;
        }
        self.go_to_slide(self.current);
    }

    /// `index` comes from a dot the slider rendered itself.
    pub fn jump_to(&mut self, index: usize) {
        self.current = index;
        self.go_to_slide(self.current);
    }

    pub fn apply(&mut self, action: SliderAction) {
        match action {
            SliderAction::Next => self.next(),
            SliderAction::Previous => self.previous(),
            SliderAction::JumpTo(index) => self.jump_to(index),
        }
    }
}

impl Reducible for Slider {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        log::debug!("slider at {} of {}", next.current(), next.count());
        Rc::new(next)
    }
}

/// Reads the slide number a dot carries in its `data-slide` attribute.
pub fn parse_dot_index(data_slide: Option<&str>, count: usize) -> Option<usize> {
    data_slide
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|index| *index < count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(count: usize) -> Slider {
        Slider::new(count).unwrap()
    }

    fn assert_in_sync(s: &Slider) {
        let frame = s.frame();
        assert_eq!(frame.active_dot, s.current());
        assert_eq!(frame.offsets[s.current()], 0);
        assert_eq!(frame.offsets.iter().filter(|o| **o == 0).count(), 1);
    }

    #[test]
    fn test_rejects_empty_slider() {
        assert!(matches!(Slider::new(0), Err(PageError::EmptySlider)));
    }

    #[test]
    fn test_initial_frame() {
        let s = slider(4);
        assert_eq!(s.current(), 0);
        assert_eq!(s.frame().offsets, vec![0, 100, 200, 300]);
        assert_eq!(s.frame().active_dot, 0);
    }

    #[test]
    fn test_next_wraps_forward() {
        let mut s = slider(3);
        s.next();
        assert_eq!(s.current(), 1);
        s.next();
        assert_eq!(s.current(), 2);
        s.next();
        assert_eq!(s.current(), 0);
        assert_in_sync(&s);
    }

    #[test]
    fn test_previous_wraps_backward() {
        let mut s = slider(3);
        s.previous();
        assert_eq!(s.current(), 2);
        assert_eq!(s.frame().offsets, vec![-200, -100, 0]);
        assert_in_sync(&s);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut s = slider(1);
        s.next();
        assert_eq!(s.current(), 0);
        s.previous();
        assert_eq!(s.current(), 0);
        assert_in_sync(&s);
    }

    #[test]
    fn test_next_and_previous_are_inverse() {
        for count in 1..=5 {
            for start in 0..count {
                let mut s = slider(count);
                s.jump_to(start);

                s.next();
                s.previous();
                assert_eq!(s.current(), start);

                s.previous();
                s.next();
                assert_eq!(s.current(), start);
                assert_in_sync(&s);
            }
        }
    }

    #[test]
    fn test_index_stays_in_bounds() {
        // Deterministic mix of moves, long enough to wrap many times.
        for count in 1..=6 {
            let mut s = slider(count);
            for step in 0..200usize {
                if step % 3 == 0 || step % 7 == 0 {
                    s.previous();
                } else {
                    s.next();
                }
                assert!(s.current() < count);
                assert_in_sync(&s);
            }
        }
    }

    #[test]
    fn test_jump_to_ignores_prior_state() {
        let mut s = slider(5);
        for from in 0..5 {
            for to in 0..5 {
                s.jump_to(from);
                s.jump_to(to);
                assert_eq!(s.current(), to);
                assert_in_sync(&s);
            }
        }
    }

    #[test]
    fn test_dot_click_from_start() {
        let mut s = slider(3);
        s.apply(SliderAction::JumpTo(2));
        assert_eq!(s.current(), 2);
        assert_eq!(s.frame().active_dot, 2);
        assert_eq!(s.frame().offsets[2], 0);
        assert_eq!(s.frame().offsets, vec![-200, -100, 0]);
    }

    #[test]
    fn test_jump_marks_one_dot_and_moves_state() {
        let mut s = slider(4);
        s.jump_to(3);
        assert_eq!(s.current(), 3);
        assert_eq!(s.frame().active_dot, 3);
        assert_eq!(s.frame().offsets, vec![-300, -200, -100, 0]);
    }

    #[test]
    fn test_frame_never_leads_state() {
        let mut s = slider(3);
        for action in [
            SliderAction::JumpTo(2),
            SliderAction::Next,
            SliderAction::Previous,
            SliderAction::Previous,
            SliderAction::JumpTo(1),
        ] {
            s.apply(action);
            assert_eq!(s.frame().active_dot, s.current());
            assert_in_sync(&s);
        }
    }

    #[test]
    fn test_reducer_returns_new_state() {
        let s = Rc::new(slider(3));
        let moved = s.clone().reduce(SliderAction::Previous);
        assert_eq!(s.current(), 0);
        assert_eq!(moved.current(), 2);
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(SliderAction::from_key("ArrowRight"), Some(SliderAction::Next));
        assert_eq!(SliderAction::from_key("ArrowLeft"), Some(SliderAction::Previous));
        assert_eq!(SliderAction::from_key("ArrowUp"), None);
        assert_eq!(SliderAction::from_key("Escape"), None);
    }

    #[test]
    fn test_parse_dot_index() {
        assert_eq!(parse_dot_index(Some("2"), 3), Some(2));
        assert_eq!(parse_dot_index(Some("3"), 3), None);
        assert_eq!(parse_dot_index(Some("x"), 3), None);
        assert_eq!(parse_dot_index(None, 3), None);
    }
}
