//! Chunking Strategies Demo
//!
//! Runs the same document through all three strategies and shows what
//! each one produces: boundaries, offsets, provenance.
//!
//! ```bash
//! cargo run --example chunking_demo
//! ```

use cleaver::{ChunkEngine, ChunkingConfig, SizeOverrides};

fn main() -> cleaver::Result<()> {
    let document = "# Machine Learning Basics\n\n\
        Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming.\n\n\
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations.\n\n\
        # Practical Notes\n\n\
        Chunk size matters more than most people expect. \
        Too small and retrieval loses context, too large and it loses focus.";

    let engine = ChunkEngine::new();

    // Legacy path: plain strings, fixed windows, no metadata.
    println!("== legacy (character windows of 120) ==");
    for (i, chunk) in engine.chunk(document, 120).iter().enumerate() {
        println!("[{i}] {} bytes: {:?}", chunk.len(), chunk);
    }

    // Metadata path: each strategy tags its chunks differently.
    for strategy in engine.available_strategies() {
        let config = ChunkingConfig {
            strategy: Some(strategy.to_string()),
            options: Some(SizeOverrides {
                max_chunk_size: Some(200),
                min_chunk_size: Some(40),
            }),
            ..ChunkingConfig::default()
        };

        println!("\n== {strategy} ==");
        for (i, chunk) in engine.chunk_with_metadata(document, &config)?.iter().enumerate() {
            let meta = &chunk.metadata;
            println!(
                "[{i}] {:>9} [{}..{}] {} bytes: {:?}",
                meta.boundary.to_string(),
                meta.start,
                meta.end,
                chunk.text.len(),
                preview(&chunk.text),
            );
        }
    }

    Ok(())
}

fn preview(text: &str) -> String {
    let mut line = text.replace('\n', " ");
    if line.len() > 60 {
        let mut cut = 57;
        while !line.is_char_boundary(cut) {
            cut -= 1;
        }
        line.truncate(cut);
        line.push_str("...");
    }
    line
}
