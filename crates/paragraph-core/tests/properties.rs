//! Generated-buffer checks: bounds, progress, monotonicity and round trips.

use paragraph_core::{BoundaryPolicy, Direction, RopeBuffer, TextBuffer, find};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const POLICIES: [BoundaryPolicy; 6] = [
    BoundaryPolicy {
        ignore_blank_lines: true,
        stop_at_begin: true,
        stop_at_end: false,
    },
    BoundaryPolicy {
        ignore_blank_lines: true,
        stop_at_begin: false,
        stop_at_end: true,
    },
    BoundaryPolicy {
        ignore_blank_lines: true,
        stop_at_begin: true,
        stop_at_end: true,
    },
    BoundaryPolicy {
        ignore_blank_lines: false,
        stop_at_begin: true,
        stop_at_end: false,
    },
    BoundaryPolicy {
        ignore_blank_lines: false,
        stop_at_begin: false,
        stop_at_end: true,
    },
    BoundaryPolicy {
        ignore_blank_lines: false,
        stop_at_begin: true,
        stop_at_end: true,
    },
];

const WORDS: [&str; 6] = ["alpha", "beta", "x", "héllo", "你好", "tab\there"];

fn content_line(rng: &mut StdRng) -> String {
    let count = rng.gen_range(1..4);
    (0..count)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn blank_line(rng: &mut StdRng) -> String {
    match rng.gen_range(0..3) {
        0 => String::new(),
        1 => "  ".to_string(),
        _ => "\t".to_string(),
    }
}

/// Random multi-line text (always contains at least one terminator).
fn random_text(rng: &mut StdRng) -> String {
    let line_count = rng.gen_range(2..24);
    let lines: Vec<String> = (0..line_count)
        .map(|_| {
            if rng.gen_bool(0.35) {
                blank_line(rng)
            } else {
                content_line(rng)
            }
        })
        .collect();
    let mut text = lines.join("\n");
    if rng.gen_bool(0.5) {
        text.push('\n');
    }
    text
}

/// Paragraphs of `text` as `(begin, end)` char offsets, using `is_blank` semantics.
fn paragraphs(text: &str, ignore_blank_lines: bool) -> Vec<(usize, usize)> {
    let mut result = Vec::new();
    let mut offset = 0;
    let mut current: Option<(usize, usize)> = None;
    for line in text.split('\n') {
        let len = line.chars().count();
        let blank = if ignore_blank_lines {
            line.trim().is_empty()
        } else {
            line.is_empty()
        };
        if blank {
            if let Some(paragraph) = current.take() {
                result.push(paragraph);
            }
        } else {
            match current.as_mut() {
                Some(paragraph) => paragraph.1 = offset + len,
                None => current = Some((offset, offset + len)),
            }
        }
        offset += len + 1;
    }
    result.extend(current);
    result
}

#[test]
fn test_results_stay_in_bounds_and_make_progress() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let text = random_text(&mut rng);
        let buffer = RopeBuffer::from_text(&text);
        let size = buffer.size();

        for policy in POLICIES {
            for start in 0..=size {
                let forward = find(&buffer, start, Direction::Forward, policy).unwrap();
                assert!(forward <= size, "{text:?} {start} {policy:?}");
                assert!(
                    forward > start || start == size,
                    "forward stuck: {text:?} {start} {policy:?}"
                );

                let backward = find(&buffer, start, Direction::Backward, policy).unwrap();
                assert!(
                    backward < start || start == 0,
                    "backward stuck: {text:?} {start} {policy:?}"
                );
            }
        }
    }
}

#[test]
fn test_forward_is_monotonic_within_a_paragraph() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let text = random_text(&mut rng);
        let buffer = RopeBuffer::from_text(&text);

        for policy in POLICIES {
            for (begin, end) in paragraphs(&text, policy.ignore_blank_lines) {
                let results: Vec<usize> = (begin..=end)
                    .map(|start| find(&buffer, start, Direction::Forward, policy).unwrap())
                    .collect();
                assert!(
                    results.windows(2).all(|pair| pair[0] <= pair[1]),
                    "{text:?} {policy:?} {results:?}"
                );
            }
        }
    }
}

#[test]
fn test_single_paragraph_round_trip_returns_to_its_begin() {
    let mut rng = StdRng::seed_from_u64(7);
    let policy = BoundaryPolicy::default();
    for _ in 0..200 {
        let leading = rng.gen_range(0..3);
        let body = rng.gen_range(1..5);
        let trailing = rng.gen_range(0..3);

        let mut lines: Vec<String> = Vec::new();
        lines.extend((0..leading).map(|_| blank_line(&mut rng)));
        lines.extend((0..body).map(|_| content_line(&mut rng)));
        lines.extend((0..trailing).map(|_| blank_line(&mut rng)));
        let mut text = lines.join("\n");
        if rng.gen_bool(0.5) {
            text.push('\n');
        }
        if !text.contains('\n') {
            // A lone unterminated line has no boundaries at all.
            continue;
        }

        let buffer = RopeBuffer::from_text(&text);
        let found = paragraphs(&text, true);
        assert_eq!(found.len(), 1, "{text:?}");
        let (begin, end) = found[0];

        for start in begin..=end {
            let forward = find(&buffer, start, Direction::Forward, policy).unwrap();
            let back = find(&buffer, forward, Direction::Backward, policy).unwrap();
            assert_eq!(back, begin, "{text:?} from {start} via {forward}");
        }
    }
}
