//! Mood walk — drift from one emotion to another through the related-emotions graph.
//!
//! At each step the walk moves to the related node closest to the target, and
//! prints the musical parameters a sequencer would receive.
//!
//! ```bash
//! cargo run --example mood_walk -- despair serenity
//! ```

use emotion_thesaurus::{EmotionCatalog, EmotionNode, MusicalParams};

const MAX_STEPS: usize = 32;

fn describe(node: &EmotionNode) {
    let p = MusicalParams::for_node(node);
    println!(
        "{:>3}  {:<20} v={:+.2} a={:.2} i={:.1}  tempo×{:.3} {:<5} dyn={:.1}{}{}{}",
        node.id,
        node.name,
        node.valence,
        node.arousal,
        node.intensity,
        p.tempo_modifier,
        p.mode.as_str(),
        p.dynamics,
        if p.sudden_changes.is_some() { "  [dynamics]" } else { "" },
        if p.allow_dissonance.is_some() { "  [harmony]" } else { "" },
        if p.irregular_meters.is_some() { "  [rhythm]" } else { "" },
    );
}

fn main() {
    let mut args = std::env::args().skip(1);
    let from = args.next().unwrap_or_else(|| "despair".to_string());
    let to = args.next().unwrap_or_else(|| "serenity".to_string());

    let catalog = EmotionCatalog::new();
    let (Some(start), Some(target)) = (
        catalog.find_emotion_by_name(&from),
        catalog.find_emotion_by_name(&to),
    ) else {
        eprintln!("unknown emotion: {} or {}", from, to);
        std::process::exit(1);
    };

    println!("walking {} → {}\n", start.name, target.name);
    let mut current = start;
    describe(current);

    for _ in 0..MAX_STEPS {
        if current.id == target.id {
            break;
        }
        let here = current.distance(target);
        let next = catalog
            .related(current.id)
            .min_by(|a, b| a.distance(target).total_cmp(&b.distance(target)));
        match next {
            Some(n) if n.distance(target) < here => {
                current = n;
                describe(current);
            }
            _ => {
                println!("\nno related emotion is closer to {}; stopping", target.name);
                break;
            }
        }
    }
}
