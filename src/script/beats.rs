use lazy_static::lazy_static;
use regex::Regex;

/// The five beats every ad script runs through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    Problem,
    Transition,
    Solution,
    Benefits,
    CallToAction,
}

impl Beat {
    pub const ALL: [Beat; 5] = [
        Beat::Problem,
        Beat::Transition,
        Beat::Solution,
        Beat::Benefits,
        Beat::CallToAction,
    ];

    /// The English emotion cue that opens this beat.
    pub fn cue(self) -> &'static str {
        match self {
            Beat::Problem => "soft, emotional",
            Beat::Transition => "hopeful",
            Beat::Solution => "happy, energetic",
            Beat::Benefits => "confident",
            Beat::CallToAction => "strong, energetic",
        }
    }
}

/// A cue and the spoken lines that follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub cue: String,
    pub lines: Vec<String>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StructureError {
    #[error("expected five beats, found {found}")]
    WrongBeatCount { found: usize },

    #[error("beat {position} should be [{expected}], found [{found}]")]
    UnexpectedCue {
        position: usize,
        expected: &'static str,
        found: String,
    },

    #[error("beat [{0}] has no lines")]
    EmptyBeat(&'static str),
}

lazy_static! {
    static ref CUE_REGEX: Regex = Regex::new(r"\[[^\[\]\n]+\]").unwrap();
}

/// Split a script into cue-led sections.
///
/// Text before the first cue is dropped; a cue may share its line with text.
pub fn parse(script: &str) -> Vec<Section> {
    let cues: Vec<_> = CUE_REGEX.find_iter(script).collect();
    let mut sections = Vec::with_capacity(cues.len());

    for (i, m) in cues.iter().enumerate() {
        let body_end = cues.get(i + 1).map(|next| next.start()).unwrap_or(script.len());
        let body = &script[m.end()..body_end];

        let lines = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        sections.push(Section {
            cue: normalize_cue(&m.as_str()[1..m.as_str().len() - 1]),
            lines,
        });
    }

    sections
}

/// Check that a script carries exactly the five beats in order, each with text.
pub fn check_structure(script: &str) -> Result<(), StructureError> {
    let sections = parse(script);

    if sections.len() != Beat::ALL.len() {
        return Err(StructureError::WrongBeatCount {
            found: sections.len(),
        });
    }

    for (position, (section, beat)) in sections.iter().zip(Beat::ALL).enumerate() {
        if section.cue != beat.cue() {
            return Err(StructureError::UnexpectedCue {
                position,
                expected: beat.cue(),
                found: section.cue.clone(),
            });
        }
        if section.lines.is_empty() {
            return Err(StructureError::EmptyBeat(beat.cue()));
        }
    }

    Ok(())
}

// "Soft ,Emotional" -> "soft, emotional"
fn normalize_cue(raw: &str) -> String {
    raw.split(',')
        .map(|part| part.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}
