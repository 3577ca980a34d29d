mod layout;
mod table;

use crate::scene::RenderScene;
use crate::tui::app::AppState;
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    let scene = app.game.render_scene();
    table::draw_frame(f, app, |f, area| match &scene {
        RenderScene::Blank => {}
        RenderScene::DeckCut(s) => table::draw_deck_cut(f, area, s, app.cut_cursor()),
        RenderScene::AnnounceDealer(s) => table::draw_announce_dealer(f, area, s),
        RenderScene::ChooseCrib(s) => table::draw_choose_crib(f, area, s),
        RenderScene::AnnounceNibs(s) => table::draw_announce_nibs(f, area, s),
        RenderScene::Pegging(s) => table::draw_pegging(f, area, s, app.game.phase()),
        RenderScene::Counting(s) => table::draw_counting(f, area, s),
    });
}
