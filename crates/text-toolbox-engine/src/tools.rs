//! The toolbox: one entry per user-facing tool, dispatched by name.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    analysis::{Statistics, analyze},
    markup::render_html,
    transform::{self, DecodeError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    SentenceCase,
    LowerCase,
    UpperCase,
    TitleCase,
    Reverse,
    DedupeLines,
    UrlEncode,
    UrlDecode,
    WordCount,
    MarkdownPreview,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

/// What running a tool produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutput {
    Text(String),
    Statistics(Statistics),
    Html(String),
}

impl ToolOutput {
    /// The output as display text; statistics become their summary line.
    pub fn into_text(self) -> String {
        match self {
            ToolOutput::Text(s) | ToolOutput::Html(s) => s,
            ToolOutput::Statistics(stats) => stats.to_string(),
        }
    }
}

impl Tool {
    pub const ALL: [Tool; 10] = [
        Tool::SentenceCase,
        Tool::LowerCase,
        Tool::UpperCase,
        Tool::TitleCase,
        Tool::Reverse,
        Tool::DedupeLines,
        Tool::UrlEncode,
        Tool::UrlDecode,
        Tool::WordCount,
        Tool::MarkdownPreview,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::SentenceCase => "sentence-case",
            Tool::LowerCase => "lower-case",
            Tool::UpperCase => "upper-case",
            Tool::TitleCase => "title-case",
            Tool::Reverse => "reverse",
            Tool::DedupeLines => "dedupe-lines",
            Tool::UrlEncode => "url-encode",
            Tool::UrlDecode => "url-decode",
            Tool::WordCount => "word-count",
            Tool::MarkdownPreview => "markdown-preview",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::SentenceCase => "Capitalize the first letter of each sentence",
            Tool::LowerCase => "Convert all text to lower case",
            Tool::UpperCase => "Convert all text to upper case",
            Tool::TitleCase => "Capitalize the first letter of each space-separated word",
            Tool::Reverse => "Reverse the text character by character",
            Tool::DedupeLines => "Remove repeated lines, keeping the first occurrence",
            Tool::UrlEncode => "Percent-encode text for use in a URL",
            Tool::UrlDecode => "Decode percent-encoded URL text",
            Tool::WordCount => "Count words, characters, sentences and paragraphs",
            Tool::MarkdownPreview => "Render Markdown to sanitized HTML",
        }
    }

    /// Runs the tool over `input`. Only [`Tool::UrlDecode`] can fail.
    pub fn run(self, input: &str) -> Result<ToolOutput, DecodeError> {
        log::debug!("running {} on {} bytes", self, input.len());
        let output = match self {
            Tool::SentenceCase => ToolOutput::Text(transform::to_sentence_case(input)),
            Tool::LowerCase => ToolOutput::Text(transform::to_lower_case(input)),
            Tool::UpperCase => ToolOutput::Text(transform::to_upper_case(input)),
            Tool::TitleCase => ToolOutput::Text(transform::to_title_case(input)),
            Tool::Reverse => ToolOutput::Text(transform::reverse(input)),
            Tool::DedupeLines => ToolOutput::Text(transform::deduplicate_lines(input)),
            Tool::UrlEncode => ToolOutput::Text(transform::url_encode(input)),
            Tool::UrlDecode => ToolOutput::Text(transform::url_decode(input)?),
            Tool::WordCount => ToolOutput::Statistics(analyze(input)),
            Tool::MarkdownPreview => ToolOutput::Html(render_html(input)),
        };
        Ok(output)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}
