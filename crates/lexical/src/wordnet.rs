//! Loader for a Princeton WordNet 3.x database directory.
//!
//! Per part of speech the directory holds:
//!
//! ```text
//! data.{noun,verb,adj,adv}   one synset per line
//! index.{noun,verb,adj,adv}  one lemma per line, synset offsets in sense order
//! {noun,verb,adj,adv}.exc    irregular forms (optional)
//! ```
//!
//! Lines starting with a space are the license header and are skipped.
//! Only lemma membership is read; pointers and glosses are ignored.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::error::LexicalError;
use crate::lexicon::{Lexicon, LexiconBuilder};
use crate::synset::{PartOfSpeech, Synset, SynsetId};

impl Lexicon {
    /// Load every part of speech from a WordNet `dict/` directory.
    ///
    /// `data.*` and `index.*` files are required; `*.exc` files are optional.
    pub fn from_wordnet_dir(dir: impl AsRef<Path>) -> Result<Lexicon, LexicalError> {
        let dir = dir.as_ref();
        let start = Instant::now();
        let mut builder = Lexicon::builder();

        for pos in PartOfSpeech::ALL {
            let suffix = pos.file_suffix();
            let offsets = load_data(&mut builder, pos, &dir.join(format!("data.{suffix}")))?;
            load_index(&mut builder, pos, &dir.join(format!("index.{suffix}")), &offsets)?;

            let exc = dir.join(format!("{suffix}.exc"));
            if exc.is_file() {
                load_exceptions(&mut builder, pos, &exc)?;
            }
        }

        let lexicon = builder.build();
        info!(
            dir = %dir.display(),
            synsets = lexicon.len(),
            lemmas = lexicon.lemma_count(),
            elapsed_ms = start.elapsed().as_millis(),
            "wordnet_loaded"
        );
        Ok(lexicon)
    }
}

fn open_lines(
    path: &Path,
) -> Result<impl Iterator<Item = (usize, std::io::Result<String>)>, LexicalError> {
    let file = File::open(path).map_err(|source| LexicalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file)
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line)))
}

fn read_line(path: &Path, line: std::io::Result<String>) -> Result<String, LexicalError> {
    line.map_err(|source| LexicalError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(path: &Path, line: usize, reason: impl Into<String>) -> LexicalError {
    LexicalError::Parse {
        path: PathBuf::from(path),
        line,
        reason: reason.into(),
    }
}

fn is_content(line: &str) -> bool {
    !line.is_empty() && !line.starts_with(' ')
}

// Adjective lemmas may carry a syntactic marker such as `(a)`, `(p)` or `(ip)`.
fn strip_marker(word: &str) -> &str {
    if word.ends_with(')') {
        if let Some(open) = word.rfind('(') {
            return &word[..open];
        }
    }
    word
}

/// Returns synset offset → builder position for this part of speech.
fn load_data(
    builder: &mut LexiconBuilder,
    pos: PartOfSpeech,
    path: &Path,
) -> Result<HashMap<u32, usize>, LexicalError> {
    let mut offsets = HashMap::new();
    for (line_no, line) in open_lines(path)? {
        let line = read_line(path, line)?;
        if !is_content(&line) {
            continue;
        }
        let (offset, lemmas) =
            parse_data_line(&line).map_err(|reason| parse_error(path, line_no, reason))?;
        let idx = builder.push_synset(Synset::new(SynsetId { pos, offset }, lemmas));
        offsets.insert(offset, idx);
    }
    Ok(offsets)
}

fn parse_data_line(line: &str) -> Result<(u32, Vec<String>), String> {
    let mut fields = line.split_ascii_whitespace();
    let offset = fields
        .next()
        .ok_or("missing synset offset")?
        .parse::<u32>()
        .map_err(|e| format!("bad synset offset: {e}"))?;
    let _lex_filenum = fields.next().ok_or("missing lexicographer file number")?;
    let ss_type = fields.next().ok_or("missing synset type")?;
    if PartOfSpeech::from_code(ss_type).is_none() {
        return Err(format!("unknown synset type {ss_type:?}"));
    }
    let w_cnt = fields.next().ok_or("missing word count")?;
    let w_cnt = usize::from_str_radix(w_cnt, 16).map_err(|e| format!("bad word count: {e}"))?;

    let mut lemmas = Vec::new();
    for _ in 0..w_cnt {
        let word = fields.next().ok_or("word list shorter than word count")?;
        let _lex_id = fields.next().ok_or("missing lex id")?;
        lemmas.push(strip_marker(word).to_string());
    }
    Ok((offset, lemmas))
}

fn load_index(
    builder: &mut LexiconBuilder,
    pos: PartOfSpeech,
    path: &Path,
    offsets: &HashMap<u32, usize>,
) -> Result<(), LexicalError> {
    let mut dangling = 0usize;
    for (line_no, line) in open_lines(path)? {
        let line = read_line(path, line)?;
        if !is_content(&line) {
            continue;
        }
        let (lemma, synset_offsets) =
            parse_index_line(&line).map_err(|reason| parse_error(path, line_no, reason))?;
        for offset in synset_offsets {
            match offsets.get(&offset) {
                Some(&idx) => builder.add_sense_index(pos, &lemma, idx),
                None => dangling += 1,
            }
        }
    }
    if dangling > 0 {
        warn!(path = %path.display(), dangling, "index entries point at unknown synsets");
    }
    Ok(())
}

fn parse_index_line(line: &str) -> Result<(String, Vec<u32>), String> {
    let fields: Vec<&str> = line.split_ascii_whitespace().collect();
    let field = |i: usize, what: &str| {
        fields
            .get(i)
            .copied()
            .ok_or_else(|| format!("missing {what}"))
    };

    let lemma = field(0, "lemma")?.to_string();
    let synset_cnt: usize = field(2, "synset count")?
        .parse()
        .map_err(|e| format!("bad synset count: {e}"))?;
    let p_cnt: usize = field(3, "pointer count")?
        .parse()
        .map_err(|e| format!("bad pointer count: {e}"))?;

    // lemma pos synset_cnt p_cnt [ptr_symbol]{p_cnt} sense_cnt tagsense_cnt offsets...
    let first_offset = p_cnt.checked_add(6).ok_or("pointer count out of range")?;
    let end = first_offset
        .checked_add(synset_cnt)
        .ok_or("synset count out of range")?;
    let raw_offsets = fields
        .get(first_offset..end)
        .ok_or("offset list shorter than synset count")?;
    let offsets = raw_offsets
        .iter()
        .map(|o| o.parse::<u32>().map_err(|e| format!("bad synset offset: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((lemma, offsets))
}

fn load_exceptions(
    builder: &mut LexiconBuilder,
    pos: PartOfSpeech,
    path: &Path,
) -> Result<(), LexicalError> {
    for (_, line) in open_lines(path)? {
        let line = read_line(path, line)?;
        let mut fields = line.split_ascii_whitespace();
        let Some(inflected) = fields.next() else {
            continue;
        };
        builder.add_exception(pos, inflected, fields);
    }
    Ok(())
}
