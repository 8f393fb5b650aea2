use crate::store::{AnimationCategory, CharacterStore};

// Translates between the selection state and a shareable query string. Both
// directions are lossy on purpose: only char/anim/skin/type are synchronized,
// and unknown input keys are parsed but never round-tripped.

pub fn apply_url_params(store: &mut CharacterStore, query: &str) {
    let params = parse_query(query);
    if let Some(requested) = first_value(&params, "char") {
        if !requested.is_empty() && store.catalog().get(requested).is_some() {
            store.selected_character_id = requested.to_string();
        }
    }
    let (cutscene_ok, dating_ok) = match store.selected_character() {
        Some(record) => (record.has_cutscene(), record.has_dating()),
        None => (false, false),
    };
    if let Some(anim) = first_value(&params, "anim") {
        if !anim.is_empty() {
            store.selected_animation = anim.to_string();
        }
    }
    if let Some(skin) = first_value(&params, "skin") {
        if !skin.is_empty() {
            store.selected_skin = skin.to_string();
        }
    }
    store.animation_category = match first_value(&params, "type").and_then(AnimationCategory::from_param) {
        Some(AnimationCategory::Ultimate) if cutscene_ok => AnimationCategory::Ultimate,
        Some(AnimationCategory::Dating) if dating_ok => AnimationCategory::Dating,
        _ => AnimationCategory::Character,
    };
    store.playing = true;
}

pub fn build_url(store: &CharacterStore) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    if !store.selected_character_id.is_empty() {
        pairs.push(("char", store.selected_character_id.as_str()));
    }
    if !store.selected_animation.is_empty() {
        pairs.push(("anim", store.selected_animation.as_str()));
    }
    if !store.selected_skin.is_empty() {
        pairs.push(("skin", store.selected_skin.as_str()));
    }
    pairs.push(("type", store.animation_category.as_str()));
    encode_query(&pairs)
}

pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let trimmed = query.strip_prefix('?').unwrap_or(query);
    let mut pairs = Vec::new();
    for segment in trimmed.split('&') {
        if segment.is_empty() {
            continue;
        }
        let (raw_key, raw_value) = match segment.split_once('=') {
            Some((key, value)) => (key, value),
            None => (segment, ""),
        };
        pairs.push((decode_component(raw_key), decode_component(raw_value)));
    }
    pairs
}

pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(candidate, _)| candidate == key).map(|(_, value)| value.as_str())
}

fn decode_component(raw: &str) -> String {
    // Form encoding writes spaces as '+'; a literal plus arrives as %2B.
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
