use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, PageMargin, Paragraph, ParagraphBorder, ParagraphBorderPosition,
    ParagraphBorders, Run, Start, Tab, TabValueType,
};

use crate::render::{Block, Span, SpanStyle};
use crate::resume::ResumeError;

// Sizes are half-points, distances twips.
const TITLE_SIZE: usize = 32;
const SECTION_TITLE_SIZE: usize = 24;
const BODY_SIZE: usize = 21;
const MARGIN: i32 = 720;
/// Letter width minus both margins.
const RIGHT_TAB_POS: usize = 12240 - 2 * MARGIN as usize;
const BULLET_NUMBERING: usize = 1;
/// Eighths of a point.
const RULE_SIZE: usize = 6;

/// Serializes rendered blocks into an Office Open XML (.docx) byte buffer.
pub fn to_docx(blocks: &[Block]) -> Result<Vec<u8>, ResumeError> {
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(MARGIN)
                .bottom(MARGIN)
                .left(MARGIN)
                .right(MARGIN),
        )
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));

    for block in blocks {
        docx = docx.add_paragraph(paragraph(block));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ResumeError::Serialize(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn paragraph(block: &Block) -> Paragraph {
    match block {
        Block::Title { text } => Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(text).bold().size(TITLE_SIZE)),
        Block::Contact { text } => Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(text).size(BODY_SIZE)),
        Block::SectionTitle { text } => {
            let mut p = Paragraph::new()
                .add_run(Run::new().add_text(text).bold().size(SECTION_TITLE_SIZE));
            p.property = p.property.set_borders(ParagraphBorders::with_empty().set(
                ParagraphBorder::new(ParagraphBorderPosition::Bottom)
                    .size(RULE_SIZE)
                    .space(1),
            ));
            p
        }
        Block::Line { spans, aside } => {
            let mut p = spans
                .iter()
                .fold(Paragraph::new(), |p, span| p.add_run(styled_run(span)));
            if let Some(aside) = aside {
                p = p
                    .add_tab(Tab::new().val(TabValueType::Right).pos(RIGHT_TAB_POS))
                    .add_run(Run::new().add_tab().add_text(aside).size(BODY_SIZE));
            }
            p
        }
        Block::Bullet { text } => Paragraph::new()
            .add_run(Run::new().add_text(text).size(BODY_SIZE))
            .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0)),
        Block::Spacer => Paragraph::new(),
    }
}

fn styled_run(span: &Span) -> Run {
    let run = Run::new().add_text(&span.text).size(BODY_SIZE);
    match span.style {
        SpanStyle::Plain => run,
        SpanStyle::Bold => run.bold(),
        SpanStyle::Italic => run.italic(),
    }
}
