/// Splits a document into blocks on runs of blank lines.
///
/// Every line is trimmed, so whitespace-only lines count as blank and a run
/// of any number of them is a single separator. Single newlines inside a
/// block are kept.
pub fn split_blocks(document: &str) -> Vec<String> {
    let mut blocks = vec![];
    let mut current: Vec<&str> = vec![];

    for line in document.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            flush_block(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }

    // EOF flush
    flush_block(&mut blocks, &mut current);
    blocks
}

fn flush_block(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    if !current.is_empty() {
        blocks.push(current.join("\n"));
        current.clear();
    }
}
