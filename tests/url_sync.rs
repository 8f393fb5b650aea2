use charview::catalog::{Catalog, CharacterRecord};
use charview::store::{AnimationCategory, CharacterStore};
use charview::url_sync::{apply_url_params, build_url};

fn record(id: &str, cutscene: &str, dating: &str) -> CharacterRecord {
    let mut record = CharacterRecord::new(id);
    record.spine = format!("{id}_spine");
    record.cutscene = cutscene.to_string();
    record.dating = dating.to_string();
    record
}

fn demo_store() -> CharacterStore {
    let catalog = Catalog::from_records(vec![record("a", "a_ult", ""), record("b", "", "b_date")])
        .expect("demo catalog builds");
    CharacterStore::new(catalog)
}

#[test]
fn round_trip_preserves_the_synchronized_fields() {
    let catalog = Catalog::from_records(vec![record("k1", "", "")]).expect("catalog builds");
    let mut store = CharacterStore::new(catalog);
    store.selected_animation = "idle".to_string();
    store.selected_skin = "default".to_string();
    store.animation_category = AnimationCategory::Character;

    let query = build_url(&store);
    assert_eq!(query, "char=k1&anim=idle&skin=default&type=character");

    let catalog = Catalog::from_records(vec![record("k1", "", "")]).expect("catalog builds");
    let mut restored = CharacterStore::new(catalog);
    apply_url_params(&mut restored, &query);
    assert_eq!(restored.selected_character_id, "k1");
    assert_eq!(restored.selected_animation, "idle");
    assert_eq!(restored.selected_skin, "default");
    assert_eq!(restored.animation_category, AnimationCategory::Character);
}

#[test]
fn end_to_end_scenario_selects_dating_view() {
    let mut store = demo_store();
    apply_url_params(&mut store, "char=b&type=dating&anim=wave");
    assert_eq!(store.selected_character_id, "b");
    assert_eq!(store.animation_category, AnimationCategory::Dating);
    assert_eq!(store.selected_animation, "wave");
    assert!(store.playing);
}

#[test]
fn category_falls_back_when_the_scene_is_missing() {
    let catalog = Catalog::from_records(vec![record("plain", "", "")]).expect("catalog builds");
    let mut store = CharacterStore::new(catalog);
    apply_url_params(&mut store, "type=ultimate");
    assert_eq!(store.animation_category, AnimationCategory::Character);
    apply_url_params(&mut store, "type=dating");
    assert_eq!(store.animation_category, AnimationCategory::Character);
    apply_url_params(&mut store, "type=nonsense");
    assert_eq!(store.animation_category, AnimationCategory::Character);
}

#[test]
fn ultimate_type_is_honored_when_the_cutscene_exists() {
    let mut store = demo_store();
    apply_url_params(&mut store, "char=a&type=ultimate");
    assert_eq!(store.animation_category, AnimationCategory::Ultimate);
}

#[test]
fn type_precondition_uses_the_newly_selected_character() {
    let mut store = demo_store();
    assert_eq!(store.selected_character_id, "a");
    // 'a' has a cutscene but the query switches to 'b', which does not.
    apply_url_params(&mut store, "char=b&type=ultimate");
    assert_eq!(store.selected_character_id, "b");
    assert_eq!(store.animation_category, AnimationCategory::Character);
}

#[test]
fn unknown_character_param_is_ignored() {
    let mut store = demo_store();
    store.selected_character_id = "b".to_string();
    apply_url_params(&mut store, "char=does-not-exist");
    assert_eq!(store.selected_character_id, "b");
}

#[test]
fn apply_always_restarts_playback() {
    let mut store = demo_store();
    store.playing = false;
    apply_url_params(&mut store, "");
    assert!(store.playing, "a freshly loaded view always starts playing");
}

#[test]
fn empty_params_leave_animation_and_skin_untouched() {
    let mut store = demo_store();
    store.selected_animation = "idle".to_string();
    store.selected_skin = "summer".to_string();
    apply_url_params(&mut store, "anim=&skin=");
    assert_eq!(store.selected_animation, "idle");
    assert_eq!(store.selected_skin, "summer");
}

#[test]
fn build_url_skips_empty_fields_but_always_writes_type() {
    let store = demo_store();
    assert_eq!(build_url(&store), "char=a&type=character");

    let empty = CharacterStore::new(Catalog::new());
    assert_eq!(build_url(&empty), "type=character");
}

#[test]
fn encoded_values_survive_the_full_cycle() {
    let mut store = demo_store();
    store.selected_animation = "wave hello".to_string();
    let query = build_url(&store);
    assert_eq!(query, "char=a&anim=wave%20hello&type=character");

    let mut restored = demo_store();
    apply_url_params(&mut restored, &query);
    assert_eq!(restored.selected_animation, "wave hello");
}
