//! # Document Assembly
//!
//! Drives the parsers and builds the HTML tree.
//!
//! Each block is classified, its inline content extracted per kind, tokenized,
//! mapped to leaves, and wrapped in the block's element. All block elements
//! become children of a single root `div`.

use crate::{
    error::MarkdownError,
    html::HtmlNode,
    parsing::{
        blocks::{
            BlockKind, block_to_block_kind,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
            markdown_to_blocks,
        },
        inline::{InlineNode, text_to_inline_nodes},
    },
    template::Template,
    title::extract_title,
};

/// Tag of the root element every document is wrapped in.
pub const ROOT_TAG: &str = "div";

/// Maps one inline node to its HTML leaf.
pub fn inline_node_to_html_node(node: &InlineNode) -> HtmlNode {
    match node {
        InlineNode::Plain(text) => HtmlNode::text(text.as_str()),
        InlineNode::Bold(text) => HtmlNode::leaf("b", text.as_str()),
        InlineNode::Italic(text) => HtmlNode::leaf("i", text.as_str()),
        InlineNode::Code(text) => HtmlNode::leaf("code", text.as_str()),
        InlineNode::Link { text, url } => {
            HtmlNode::leaf("a", text.as_str()).with_attribute("href", url.as_str())
        }
        InlineNode::Image { alt, url } => HtmlNode::leaf("img", "")
            .with_attribute("src", url.as_str())
            .with_attribute("alt", alt.as_str()),
    }
}

/// Tokenizes inline text and maps every node to an HTML leaf.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(text_to_inline_nodes(text)?
        .iter()
        .map(inline_node_to_html_node)
        .collect())
}

/// Converts a whole Markdown document into a root `div` element.
///
/// `\r\n` line endings are treated as `\n`.
///
/// # Errors
/// The first inline error from any block, or
/// [`MarkdownError::UnclassifiableBlock`] if a heading or code block fails its
/// structural re-check.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let markdown = markdown.replace("\r\n", "\n");
    let children = markdown_to_blocks(&markdown)
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::element(ROOT_TAG, children))
}

/// Converts a document and serializes the result.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_html_node(markdown)?.to_html()
}

/// Converts a document and fills a template's title and content slots.
///
/// # Errors
/// Any conversion error, or [`MarkdownError::MissingTitle`] if the document
/// has no `# ` line.
pub fn render_page(markdown: &str, template: &Template) -> Result<String, MarkdownError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(template.render(title, &content))
}

fn block_to_html_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let unclassifiable = || MarkdownError::UnclassifiableBlock {
        block: block.to_string(),
    };

    match block_to_block_kind(block) {
        BlockKind::Heading => {
            let (level, text) = Heading::parse(block).ok_or_else(unclassifiable)?;
            Ok(HtmlNode::element(format!("h{level}"), text_to_children(text)?))
        }
        BlockKind::Paragraph => Ok(HtmlNode::element(
            "p",
            text_to_children(&Paragraph::content(block))?,
        )),
        BlockKind::Code => {
            let text = CodeFence::content(block).ok_or_else(unclassifiable)?;
            Ok(HtmlNode::element(
                "pre",
                vec![HtmlNode::element("code", text_to_children(text)?)],
            ))
        }
        BlockKind::Quote => Ok(HtmlNode::element(
            "blockquote",
            text_to_children(&BlockQuote::content(block))?,
        )),
        BlockKind::UnorderedList => {
            let items = block
                .split('\n')
                .map(|line| {
                    let text = UnorderedList::item_text(line).ok_or_else(unclassifiable)?;
                    Ok(HtmlNode::element("li", text_to_children(text)?))
                })
                .collect::<Result<Vec<_>, MarkdownError>>()?;
            Ok(HtmlNode::element("ul", items))
        }
        BlockKind::OrderedList => {
            let items = block
                .split('\n')
                .enumerate()
                .map(|(i, line)| {
                    let text = OrderedList::item_text(line, i + 1).ok_or_else(unclassifiable)?;
                    Ok(HtmlNode::element("li", text_to_children(text)?))
                })
                .collect::<Result<Vec<_>, MarkdownError>>()?;
            Ok(HtmlNode::element("ol", items))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_maps_to_untagged_leaf() {
        let node = inline_node_to_html_node(&InlineNode::plain("This is a text node"));
        assert_eq!(node, HtmlNode::text("This is a text node"));
        assert_eq!(node.tag(), None);
    }

    #[test]
    fn styles_map_to_tags() {
        assert_eq!(
            inline_node_to_html_node(&InlineNode::Bold("b".into())).to_html().unwrap(),
            "<b>b</b>"
        );
        assert_eq!(
            inline_node_to_html_node(&InlineNode::Italic("i".into())).to_html().unwrap(),
            "<i>i</i>"
        );
        assert_eq!(
            inline_node_to_html_node(&InlineNode::Code("c".into())).to_html().unwrap(),
            "<code>c</code>"
        );
    }

    #[test]
    fn link_maps_to_anchor() {
        let node = inline_node_to_html_node(&InlineNode::link("boot", "https://boot.dev"));
        assert_eq!(
            node.to_html().unwrap(),
            r#"<a href="https://boot.dev">boot</a>"#
        );
    }

    #[test]
    fn image_maps_to_img_with_src_then_alt() {
        let node = inline_node_to_html_node(&InlineNode::image("a cat", "cat.png"));
        assert_eq!(node.value(), Some(""));
        assert_eq!(
            node.to_html().unwrap(),
            r#"<img src="cat.png" alt="a cat"></img>"#
        );
    }

    #[test]
    fn heading_then_paragraph_tree() {
        let node = markdown_to_html_node("# Heading\n\nSome *text* here").unwrap();
        assert_eq!(
            node,
            HtmlNode::element(
                "div",
                vec![
                    HtmlNode::element("h1", vec![HtmlNode::text("Heading")]),
                    HtmlNode::element(
                        "p",
                        vec![
                            HtmlNode::text("Some "),
                            HtmlNode::leaf("i", "text"),
                            HtmlNode::text(" here"),
                        ]
                    ),
                ]
            )
        );
        assert_snapshot!(
            node.to_html().unwrap(),
            @"<div><h1>Heading</h1><p>Some <i>text</i> here</p></div>"
        );
    }

    #[test]
    fn unordered_list() {
        assert_snapshot!(
            markdown_to_html("- a\n- b").unwrap(),
            @"<div><ul><li>a</li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn paragraph_lines_are_joined() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

";
        assert_snapshot!(
            markdown_to_html(md).unwrap(),
            @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p></div>"
        );
    }

    #[test]
    fn two_paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with *italic* text and `code` here

";
        assert_snapshot!(
            markdown_to_html(md).unwrap(),
            @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn unordered_and_ordered_lists() {
        let md = "
- This is a list
- with items
- and *more* items

1. This is an `ordered` list
2. with items
3. and more items

";
        assert_snapshot!(
            markdown_to_html(md).unwrap(),
            @"<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul><ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol></div>"
        );
    }

    #[test]
    fn headings_by_level() {
        let md = "
# this is an h1

this is paragraph text

## this is an h2
";
        assert_snapshot!(
            markdown_to_html(md).unwrap(),
            @"<div><h1>this is an h1</h1><p>this is paragraph text</p><h2>this is an h2</h2></div>"
        );
    }

    #[test]
    fn blockquote_lines_are_joined() {
        let md = "
> This is a
> blockquote block

this is paragraph text

";
        assert_snapshot!(
            markdown_to_html(md).unwrap(),
            @"<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
        );
    }

    #[test]
    fn code_block_keeps_newlines() {
        let md = "```\nfn main() {}\nlet x = 1;\n```";
        let node = markdown_to_html_node(md).unwrap();
        assert_eq!(
            node.children()[0],
            HtmlNode::element(
                "pre",
                vec![HtmlNode::element(
                    "code",
                    vec![HtmlNode::text("fn main() {}\nlet x = 1;\n")]
                )]
            )
        );
    }

    #[test]
    fn ten_item_ordered_list() {
        let md = (1..=10)
            .map(|i| format!("{i}. item {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let node = markdown_to_html_node(&md).unwrap();
        let list = &node.children()[0];
        assert_eq!(list.tag(), Some("ol"));
        assert_eq!(list.children().len(), 10);
        assert_eq!(
            list.children()[9],
            HtmlNode::element("li", vec![HtmlNode::text("item 10")])
        );
    }

    #[test]
    fn image_and_link_in_paragraph() {
        assert_snapshot!(
            markdown_to_html("See ![logo](/img/logo.png) on [the site](https://example.com)").unwrap(),
            @r#"<div><p>See <img src="/img/logo.png" alt="logo"></img> on <a href="https://example.com">the site</a></p></div>"#
        );
    }

    #[test]
    fn crlf_document_splits_like_lf() {
        let crlf = "# T\r\n\r\nbody line\r\nsecond\r\n\r\n- a\r\n- b";
        assert_eq!(
            markdown_to_html(crlf).unwrap(),
            markdown_to_html(&crlf.replace("\r\n", "\n")).unwrap()
        );
        assert_snapshot!(
            markdown_to_html(crlf).unwrap(),
            @"<div><h1>T</h1><p>body line second</p><ul><li>a</li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn code_block_content_goes_through_inline_markup() {
        assert_eq!(
            markdown_to_html("```\nlet **x** = 1;\n```").unwrap(),
            "<div><pre><code>let <b>x</b> = 1;\n</code></pre></div>"
        );
        assert_eq!(
            markdown_to_html("```\nlet *x = 1;\n```"),
            Err(MarkdownError::UnclosedDelimiter { delimiter: "*" })
        );
    }

    #[test]
    fn empty_document_is_empty_root() {
        assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
    }

    #[test]
    fn render_page_fills_template() {
        let template = Template::new("<title>{{ Title }}</title>{{ Content }}");
        assert_eq!(
            render_page("# Hello\n\nworld", &template).unwrap(),
            "<title>Hello</title><div><h1>Hello</h1><p>world</p></div>"
        );
    }

    #[test]
    fn render_page_requires_title() {
        let template = Template::new("{{ Content }}");
        assert_eq!(
            render_page("## only h2", &template),
            Err(MarkdownError::MissingTitle)
        );
    }

    #[test]
    fn inline_error_aborts_conversion() {
        let result = markdown_to_html("# Fine\n\nbroken **bold");
        assert_eq!(
            result,
            Err(MarkdownError::UnclosedDelimiter { delimiter: "**" })
        );
    }
}
