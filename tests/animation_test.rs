//! Animation Loop Integration Tests
//!
//! Drives the animation state and frame composition together across many
//! ticks, the same sequence the run loop performs, and checks the
//! observable properties:
//!
//! 1. **Boundary invariant**: the offset never leaves [0, MAX_OFFSET]
//! 2. **Triangle wave**: one full back-and-forth every 40 ticks
//! 3. **Pose cycling**: poses repeat in fixed order while the frame
//!    counter keeps climbing
//! 4. **Exact output**: composed frames match the reference byte-for-byte

use pretty_assertions::assert_eq;

use dancer_tui::dancer::{DancerState, Direction, FrameSet, FRAME_COUNT, MAX_OFFSET};
use dancer_tui::render::{compose_farewell, compose_frame, INSTRUCTION};

/// Render-then-advance, as the run loop does each tick
fn run_ticks(state: &mut DancerState, frames: &FrameSet, n: usize) -> Vec<String> {
    let mut rendered = Vec::with_capacity(n);
    for _ in 0..n {
        rendered.push(compose_frame(state, frames));
        state.tick();
    }
    rendered
}

#[test]
fn offset_stays_in_bounds_for_thousands_of_ticks() {
    let mut state = DancerState::new();
    let frames = FrameSet::dance();

    for _ in 0..5_000 {
        let frame = compose_frame(&state, &frames);
        // The rendered indentation never exceeds the travel bound either
        let sprite_line = frame.lines().nth(3).expect("sprite line present");
        let indent = sprite_line.len() - sprite_line.trim_start().len();
        assert!(indent <= MAX_OFFSET as usize);

        state.tick();
        assert!(state.offset >= 0 && state.offset <= MAX_OFFSET);
    }
}

#[test]
fn one_full_cycle_takes_forty_ticks() {
    let mut state = DancerState::new();
    let frames = FrameSet::dance();

    run_ticks(&mut state, &frames, 40);

    assert_eq!(state.offset, 0);
    assert_eq!(state.direction, Direction::Right);
    assert_eq!(state.frame_index, 40);
}

#[test]
fn poses_cycle_in_fixed_order() {
    let frames = FrameSet::dance();
    let mut state = DancerState::new();

    let mut seen = Vec::new();
    for _ in 0..12 {
        seen.push(frames.pose(state.frame_index));
        state.tick();
    }

    let one_cycle: Vec<_> = (0..FRAME_COUNT as u64).map(|i| frames.pose(i)).collect();
    assert_eq!(&seen[..6], &one_cycle[..]);
    assert_eq!(&seen[6..], &one_cycle[..]);
}

#[test]
fn rendered_frames_match_reference_output() {
    let mut state = DancerState::new();
    let frames = FrameSet::dance();
    let rendered = run_ticks(&mut state, &frames, 3);

    assert_eq!(
        rendered,
        vec![
            format!("\n\n\n(>'.')>\n\n\n{INSTRUCTION}\n"),
            format!("\n\n\n <('.'<)\n\n\n{INSTRUCTION}\n"),
            format!("\n\n\n  (^'.')^\n\n\n{INSTRUCTION}\n"),
        ]
    );
}

#[test]
fn every_frame_carries_the_instruction_line() {
    let mut state = DancerState::new();
    let frames = FrameSet::dance();

    for frame in run_ticks(&mut state, &frames, 100) {
        assert!(frame.ends_with(&format!("{INSTRUCTION}\n")));
    }
}

#[test]
fn farewell_is_a_single_line() {
    let farewell = compose_farewell();
    assert_eq!(farewell, "\nDance over!\n");
    assert_eq!(farewell.matches("Dance over!").count(), 1);
}
