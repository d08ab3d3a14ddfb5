//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveView, GalleryPredicate, SortKey};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Handle error message first (blocks all other interactions)
        if model.has_error().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    model.clear_error().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        if key.code == KeyCode::F(1) {
            model.show_help_popup().await;
            return Ok(());
        }

        let active_view = model.active_view().await;
        match active_view {
            ActiveView::List => {
                // Every printable key goes to the search box here
                match key.code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        let query = model.append_to_query(c).await;
                        drop(model);
                        self.on_query_edited(query).await;
                    }
                    KeyCode::Backspace => {
                        let query = model.backspace_query().await;
                        drop(model);
                        self.on_query_edited(query).await;
                    }
                    KeyCode::Esc => {
                        let query = model.clear_query().await;
                        drop(model);
                        self.on_query_edited(query).await;
                    }
                    KeyCode::Up => model.list_move_up().await,
                    KeyCode::Down => model.list_move_down().await,
                    KeyCode::F(2) => {
                        drop(model);
                        self.toggle_sort(SortKey::Name).await;
                    }
                    KeyCode::F(3) => {
                        drop(model);
                        self.toggle_sort(SortKey::Modified).await;
                    }
                    KeyCode::Enter => {
                        let selected = model.selected_list_character().await;
                        drop(model);
                        if let Some(id) = selected {
                            self.open_detail(id, ActiveView::List).await;
                        }
                    }
                    KeyCode::Tab | KeyCode::BackTab => {
                        drop(model);
                        self.mount_gallery_view().await;
                    }
                    _ => {}
                }
            }
            ActiveView::Gallery => match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => {
                    model.toggle_gallery_filter(GalleryPredicate::HasComics).await;
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    model.toggle_gallery_filter(GalleryPredicate::HasSeries).await;
                }
                KeyCode::Char('e') | KeyCode::Char('E') => {
                    model.toggle_gallery_filter(GalleryPredicate::HasEvents).await;
                }
                KeyCode::Up => model.gallery_move_up().await,
                KeyCode::Down => model.gallery_move_down().await,
                KeyCode::Enter => {
                    let selected = model.selected_gallery_character().await;
                    drop(model);
                    if let Some(id) = selected {
                        self.open_detail(id, ActiveView::Gallery).await;
                    }
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    drop(model);
                    self.mount_list_view().await;
                }
                KeyCode::Char('?') => model.show_help_popup().await,
                KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true).await,
                _ => {}
            },
            ActiveView::Detail => match key.code {
                KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('P') => {
                    drop(model);
                    self.navigate_detail(false).await;
                }
                KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => {
                    drop(model);
                    self.navigate_detail(true).await;
                }
                KeyCode::Esc | KeyCode::Backspace => {
                    drop(model);
                    self.close_detail().await;
                }
                KeyCode::Char('?') => model.show_help_popup().await,
                KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true).await,
                _ => {}
            },
        }
        Ok(())
    }
}
