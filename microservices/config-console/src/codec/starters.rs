//! Conversation-starter slice decoding

use bizmsg_sdk::{ConversationStarter, MAX_CONVERSATION_STARTERS};

use super::form::FormMap;

/// Decode the starter slots `[start, start + MAX_CONVERSATION_STARTERS)`
/// from the flat starter arrays under `prefix`.
///
/// A slot with empty text is omitted; a slot with a non-empty URL becomes
/// an open-URL action, otherwise a reply. Order is preserved, so the
/// result may be shorter than the slice.
pub fn decode_conversation_starters(
    form: &FormMap,
    prefix: &str,
    start: usize,
) -> Vec<ConversationStarter> {
    let texts = form.values(&format!("{prefix}.text"));
    let urls = form.values(&format!("{prefix}.url"));
    let postbacks = form.values(&format!("{prefix}.postbackData"));

    let mut starters = Vec::new();
    for slot in start..start + MAX_CONVERSATION_STARTERS {
        let text = texts.get(slot).map(String::as_str).unwrap_or("");
        if text.is_empty() {
            continue;
        }

        let url = urls.get(slot).map(String::as_str).unwrap_or("");
        let postback = postbacks.get(slot).map(String::as_str).unwrap_or("");
        if url.is_empty() {
            starters.push(ConversationStarter::reply(text, postback));
        } else {
            starters.push(ConversationStarter::open_url(text, postback, url));
        }
    }
    starters
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "conversationalStarter";

    fn starter_form(texts: &[&str], urls: &[&str], postbacks: &[&str]) -> FormMap {
        let mut form = FormMap::new();
        for text in texts {
            form.insert(format!("{PREFIX}.text"), *text);
        }
        for url in urls {
            form.insert(format!("{PREFIX}.url"), *url);
        }
        for postback in postbacks {
            form.insert(format!("{PREFIX}.postbackData"), *postback);
        }
        form
    }

    #[test]
    fn empty_text_slots_are_omitted() {
        let form = starter_form(
            &["Hi", "", "Bye", "", ""],
            &["", "", "", "", ""],
            &["p0", "p1", "p2", "p3", "p4"],
        );

        let starters = decode_conversation_starters(&form, PREFIX, 0);
        assert_eq!(starters.len(), 2);
        assert_eq!(starters[0].suggestion.reply.as_ref().unwrap().text, "Hi");
        assert_eq!(starters[1].suggestion.reply.as_ref().unwrap().text, "Bye");
    }

    #[test]
    fn non_empty_url_selects_action_variant() {
        let form = starter_form(
            &["Shop", "Help", "", "", ""],
            &["https://shop.test", "", "", "", ""],
            &["p0", "p1", "", "", ""],
        );

        let starters = decode_conversation_starters(&form, PREFIX, 0);
        assert_eq!(starters.len(), 2);

        let action = starters[0].suggestion.action.as_ref().unwrap();
        assert_eq!(action.text, "Shop");
        assert_eq!(action.postback_data, "p0");
        assert_eq!(action.open_url_action.url, "https://shop.test");
        assert!(starters[0].suggestion.reply.is_none());

        let reply = starters[1].suggestion.reply.as_ref().unwrap();
        assert_eq!(reply.text, "Help");
        assert!(starters[1].suggestion.action.is_none());
    }

    #[test]
    fn slice_reads_exactly_five_slots_from_offset() {
        // Two locale blocks of five slots; the second block starts at 5.
        let form = starter_form(
            &["a", "b", "c", "d", "e", "f", "", "", "", ""],
            &["", "", "", "", "", "", "", "", "", ""],
            &["", "", "", "", "", "", "", "", "", ""],
        );

        let second_block = decode_conversation_starters(&form, PREFIX, 5);
        assert_eq!(second_block.len(), 1);
        assert_eq!(
            second_block[0].suggestion.reply.as_ref().unwrap().text,
            "f"
        );
    }

    #[test]
    fn slots_past_the_submitted_arrays_are_skipped() {
        let form = starter_form(&["only"], &[""], &[""]);

        let starters = decode_conversation_starters(&form, PREFIX, 0);
        assert_eq!(starters.len(), 1);

        let past_end = decode_conversation_starters(&form, PREFIX, 5);
        assert!(past_end.is_empty());
    }
}
