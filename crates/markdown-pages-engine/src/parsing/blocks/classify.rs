use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a single trimmed block.
///
/// Rules are tried in order and the first match wins: heading, code, quote,
/// ordered list, unordered list, then paragraph as the fallback.
pub fn block_to_block_kind(block: &str) -> BlockKind {
    if Heading::matches(block) {
        return BlockKind::Heading;
    }
    if CodeFence::matches(block) {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| BlockQuote::is_quote_line(line)) {
        return BlockKind::Quote;
    }
    if OrderedList::matches(&lines) {
        return BlockKind::OrderedList;
    }
    if lines.iter().all(|line| UnorderedList::is_item(line)) {
        return BlockKind::UnorderedList;
    }

    BlockKind::Paragraph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# head", BlockKind::Heading)]
    #[case("###### head", BlockKind::Heading)]
    #[case("```hello```", BlockKind::Code)]
    #[case("```\nhello\n```", BlockKind::Code)]
    #[case("```a```", BlockKind::Code)]
    #[case("> quote", BlockKind::Quote)]
    #[case(">quote", BlockKind::Quote)]
    #[case(">>quote", BlockKind::Quote)]
    #[case(">quote1\n>quote2", BlockKind::Quote)]
    #[case(">", BlockKind::Quote)]
    #[case("- item", BlockKind::UnorderedList)]
    #[case("* item", BlockKind::UnorderedList)]
    #[case("- item\n* item", BlockKind::UnorderedList)]
    #[case("* item\n- item", BlockKind::UnorderedList)]
    #[case("1. first item", BlockKind::OrderedList)]
    #[case("1. first item\n2. second item\n3. third item", BlockKind::OrderedList)]
    fn classifies(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(block_to_block_kind(block), expected);
    }

    #[rstest]
    #[case::plain("block")]
    #[case::seven_hashes("####### x")]
    #[case::no_space_after_hash("#head")]
    #[case::dash_without_space("-item")]
    #[case::star_without_space("*item")]
    #[case::mixed_bullets("* item\n*item")]
    #[case::skipped_ordinal("1. a\n3. b")]
    #[case::starts_at_zero("0. start with zero")]
    #[case::starts_at_two("2. second item")]
    #[case::ordinal_without_space("1.nospace")]
    #[case::dash_ordinal("1- how about this")]
    #[case::short_closing_fence("```code``")]
    #[case::double_ticks("``code``")]
    #[case::partial_quote(">quote\nnoquote")]
    #[case::trailing_quote_marker("quote<")]
    #[case::multi_line_heading("# title\nmore")]
    fn falls_back_to_paragraph(#[case] block: &str) {
        assert_eq!(block_to_block_kind(block), BlockKind::Paragraph);
    }
}
