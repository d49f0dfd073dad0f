use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::{Map, Value};

use crate::block::Block;

lazy_static! {
    static ref DELIMITER: Regex = Regex::new(
        r"(?s)<!--\s+(?P<closer>/)?wp:(?P<namespace>[a-z][a-z0-9_-]*/)?(?P<name>[a-z][a-z0-9_-]*)\s+(?P<attrs>\{.*?\}\s+)?(?P<void>/)?-->"
    )
    .unwrap();
}

const DELIMITER_PREFIX: &str = "<!-- wp:";

/// Cheap test for whether `content` contains any block delimiter.
pub fn has_blocks(content: &str) -> bool {
    content.contains(DELIMITER_PREFIX)
}

enum Token {
    Void(Block),
    Opener(Block),
    Closer,
}

fn block_name(caps: &Captures<'_>) -> String {
    let namespace = caps.name("namespace").map_or("core/", |m| m.as_str());
    format!("{}{}", namespace, &caps["name"])
}

fn block_attrs(caps: &Captures<'_>, name: &str) -> Map<String, Value> {
    let Some(raw) = caps.name("attrs") else {
        return Map::new();
    };
    match serde_json::from_str::<Value>(raw.as_str().trim()) {
        Ok(Value::Object(attrs)) => attrs,
        Ok(_) | Err(_) => {
            log::debug!("Ignoring unreadable attributes on block {}", name);
            Map::new()
        }
    }
}

fn token(caps: &Captures<'_>) -> Token {
    if caps.name("closer").is_some() {
        return Token::Closer;
    }
    let name = block_name(caps);
    let attrs = block_attrs(caps, &name);
    let block = Block::new(name).with_attrs(attrs);
    if caps.name("void").is_some() {
        Token::Void(block)
    } else {
        Token::Opener(block)
    }
}

/// Place a finished block either in its parent or at the top level.
fn emit(output: &mut Vec<Block>, stack: &mut [Block], block: Block) {
    match stack.last_mut() {
        Some(parent) => parent.push_block(block),
        None => output.push(block),
    }
}

fn emit_html(output: &mut Vec<Block>, stack: &mut [Block], html: &str) {
    match stack.last_mut() {
        Some(parent) => parent.push_html(html),
        None if !html.is_empty() => output.push(Block::freeform(html)),
        None => {}
    }
}

/// Parse serialized block markup into a tree.
///
/// Text outside any block becomes freeform nodes. Unclosed blocks are
/// closed at the end of input, each nesting into the block that opened
/// before it. A closing delimiter with nothing open ends parsing and the
/// remaining input becomes one freeform node. Attributes that are not a
/// JSON object are replaced by an empty map.
pub fn parse(content: &str) -> Vec<Block> {
    let mut output = Vec::new();
    let mut stack: Vec<Block> = Vec::new();
    let mut offset = 0;

    for caps in DELIMITER.captures_iter(content) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let leading = &content[offset..whole.start()];

        match token(&caps) {
            Token::Void(block) => {
                emit_html(&mut output, &mut stack, leading);
                emit(&mut output, &mut stack, block);
            }
            Token::Opener(block) => {
                emit_html(&mut output, &mut stack, leading);
                stack.push(block);
            }
            Token::Closer => {
                let Some(mut block) = stack.pop() else {
                    log::debug!("Stray block closer at offset {}", whole.start());
                    break;
                };
                block.push_html(leading);
                emit(&mut output, &mut stack, block);
            }
        }
        offset = whole.end();
    }

    emit_html(&mut output, &mut stack, &content[offset..]);
    while let Some(block) = stack.pop() {
        emit(&mut output, &mut stack, block);
    }
    output
}
