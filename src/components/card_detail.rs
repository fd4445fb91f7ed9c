//! Card Detail Modal
//!
//! Full view of one card: markdown description, edit form, comments,
//! links, attachments with upload/download, checklist and assignees.
//! All mutation goes through the store helpers by card id.

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::components::{CardTimer, DeleteConfirmButton};
use crate::context::AppContext;
use crate::format::format_file_size;
use crate::markdown::render_markdown;
use crate::models::{
    Attachment, Card, ChecklistItem, Comment, Priority, TimerState, CARD_TYPES,
};
use crate::store::{self, use_app_store};

#[component]
pub fn CardDetailModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let cards = store::active_cards(&store);
    let selected = Memo::new(move |_| {
        ctx.selected_card.get().and_then(|id| {
            cards.get().into_iter().find(|card| card.id == id).map(|mut card| {
                // Tick noise must not re-render the whole modal; the timer
                // widget reads its own reactive state.
                card.timer = TimerState::default();
                card
            })
        })
    });

    view! {
        {move || selected.get().map(|card| view! {
            <div class="modal-backdrop" on:click=move |_| ctx.close_card()>
                <div class="modal card-detail" on:click=|ev| ev.stop_propagation()>
                    <CardDetailBody card=card />
                </div>
            </div>
        })}
    }
}

#[component]
fn CardDetailBody(card: Card) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let card_id = card.id.clone();

    // ========================
    // Edit form
    // ========================

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(String::new());
    let (edit_description, set_edit_description) = signal(String::new());
    let (edit_priority, set_edit_priority) = signal(card.priority);
    let (edit_type, set_edit_type) = signal(String::new());
    let (edit_custom, set_edit_custom) = signal(false);
    let (edit_date, set_edit_date) = signal(String::new());
    let (edit_deadline, set_edit_deadline) = signal(String::new());

    let snapshot = card.clone();
    let on_edit_toggle = move |_| {
        if !editing.get_untracked() {
            set_edit_title.set(snapshot.title.clone());
            set_edit_description.set(snapshot.description.clone());
            set_edit_priority.set(snapshot.priority);
            set_edit_type.set(snapshot.card_type.clone());
            set_edit_custom.set(false);
            set_edit_date.set(snapshot.date.format("%Y-%m-%d").to_string());
            set_edit_deadline.set(
                snapshot
                    .deadline
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            );
        }
        set_editing.update(|v| *v = !*v);
    };

    let save_id = card_id.clone();
    let on_save = move |_| {
        let new_title = edit_title.get();
        if new_title.trim().is_empty() {
            return;
        }
        store::update_card(&store, &save_id, |card| {
            card.title = new_title.trim().to_string();
            card.description = edit_description.get_untracked();
            card.priority = edit_priority.get_untracked();
            card.card_type = edit_type.get_untracked();
            if let Ok(date) = NaiveDate::parse_from_str(edit_date.get_untracked().trim(), "%Y-%m-%d") {
                card.date = date;
            }
            card.deadline =
                NaiveDate::parse_from_str(edit_deadline.get_untracked().trim(), "%Y-%m-%d").ok();
        });
        set_editing.set(false);
    };

    // ========================
    // Comments
    // ========================

    let (new_comment, set_new_comment) = signal(String::new());
    let comment_card_id = card_id.clone();
    let on_add_comment = move |_| {
        let text = new_comment.get();
        if text.trim().is_empty() {
            return;
        }
        let id = store::next_id(&store, "comment");
        store::update_card(&store, &comment_card_id, |card| {
            card.comments.push(Comment {
                id,
                text: text.trim().to_string(),
                author: "You".to_string(),
                posted_at: Utc::now(),
            });
        });
        set_new_comment.set(String::new());
    };

    // ========================
    // Links
    // ========================

    let (new_link, set_new_link) = signal(String::new());
    let link_card_id = card_id.clone();
    let on_add_link = move |_| {
        let link = new_link.get();
        if link.trim().is_empty() {
            return;
        }
        store::update_card(&store, &link_card_id, |card| {
            card.links.push(link.trim().to_string());
        });
        set_new_link.set(String::new());
    };

    // ========================
    // Checklist
    // ========================

    let (new_check, set_new_check) = signal(String::new());
    let check_card_id = card_id.clone();
    let on_add_check = move |_| {
        let text = new_check.get();
        if text.trim().is_empty() {
            return;
        }
        let id = store::next_id(&store, "check");
        store::update_checklists(&store, &check_card_id, |items| {
            items.push(ChecklistItem { id, text: text.trim().to_string(), checked: false });
        });
        set_new_check.set(String::new());
    };

    let column_label = card.column.key();
    let close = move |_| ctx.close_card();

    // The editing closure takes ownership of the rendered description;
    // the sections get their own card snapshots up front.
    let description = card.description.clone();
    let checklist_card = card.clone();
    let comments_card = card.clone();
    let links_card = card.clone();
    let attachments_card = card.clone();

    view! {
        <div class="detail-header">
            <h2>{card.title.clone()}</h2>
            <div class="detail-header-actions">
                <button class="edit-btn" on:click=on_edit_toggle>
                    {move || if editing.get() { "View" } else { "Edit" }}
                </button>
                <button class="close-btn" on:click=close>"×"</button>
            </div>
        </div>

        <div class="detail-meta">
            <span class=format!("column-chip column-chip-{}", column_label)>{column_label}</span>
            <span class="detail-dates">
                "Created " {card.date.format("%Y-%m-%d").to_string()}
                {card.deadline.map(|d| format!(" · due {}", d.format("%Y-%m-%d")))}
            </span>
        </div>

        {move || if editing.get() {
            view! { <div class="detail-edit">
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || edit_title.get()
                    on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description (markdown)"
                    prop:value=move || edit_description.get()
                    on:input=move |ev| set_edit_description.set(event_target_value(&ev))
                ></textarea>
                <div class="detail-edit-row">
                    <select on:change=move |ev| {
                        if let Some(p) = Priority::from_label(&event_target_value(&ev)) {
                            set_edit_priority.set(p);
                        }
                    }>
                        {Priority::ALL.into_iter().map(|p| {
                            let label = p.label();
                            view! {
                                <option value=label selected=move || edit_priority.get().label() == label>
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>

                    {move || if edit_custom.get() {
                        view! {
                            <input
                                type="text"
                                placeholder="Enter your own type..."
                                prop:value=move || edit_type.get()
                                on:input=move |ev| set_edit_type.set(event_target_value(&ev))
                            />
                        }.into_any()
                    } else {
                        view! {
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                if value == "__custom__" {
                                    set_edit_custom.set(true);
                                    set_edit_type.set(String::new());
                                } else {
                                    set_edit_type.set(value);
                                }
                            }>
                                {CARD_TYPES.iter().map(|t| view! {
                                    <option value=*t selected=move || edit_type.get() == *t>{*t}</option>
                                }).collect_view()}
                                {(!CARD_TYPES.contains(&edit_type.get_untracked().as_str())
                                    && !edit_type.get_untracked().is_empty())
                                    .then(|| {
                                        let custom = edit_type.get_untracked();
                                        view! { <option value=custom.clone() selected=true>{custom.clone()}</option> }
                                    })}
                                <option value="__custom__">"Custom…"</option>
                            </select>
                        }.into_any()
                    }}
                </div>
                <div class="detail-edit-row">
                    <input
                        type="date"
                        prop:value=move || edit_date.get()
                        on:input=move |ev| set_edit_date.set(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        prop:value=move || edit_deadline.get()
                        on:input=move |ev| set_edit_deadline.set(event_target_value(&ev))
                    />
                </div>
                <div class="detail-edit-actions">
                    <button class="submit-btn" on:click=on_save.clone()>"Save"</button>
                    <button class="cancel-btn" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                </div>
            </div> }.into_any()
        } else {
            let rendered = render_markdown(&description);
            view! {
                <div class="detail-description markdown-body" inner_html=rendered></div>
            }.into_any()
        }}

        <div class="detail-section">
            <p class="detail-section-title">"Timer"</p>
            <CardTimer card_id=card_id.clone() />
        </div>

        <ChecklistSection card=checklist_card on_add=Callback::new(on_add_check)
            new_check=new_check set_new_check=set_new_check />

        <CommentsSection card=comments_card on_add=Callback::new(on_add_comment)
            new_comment=new_comment set_new_comment=set_new_comment />

        <LinksSection card=links_card on_add=Callback::new(on_add_link)
            new_link=new_link set_new_link=set_new_link />

        <AttachmentsSection card=attachments_card />

        {(!card.assignees.is_empty()).then(|| view! {
            <div class="detail-section">
                <p class="detail-section-title">"Assignees"</p>
                <div class="card-assignees">
                    {card.assignees.iter().map(|src| view! {
                        <img class="assignee-avatar" src=src.clone() alt="assignee" />
                    }).collect_view()}
                </div>
            </div>
        })}
    }
}

#[component]
fn ChecklistSection(
    card: Card,
    on_add: Callback<()>,
    new_check: ReadSignal<String>,
    set_new_check: WriteSignal<String>,
) -> impl IntoView {
    let store = use_app_store();
    let card_id = card.id.clone();

    view! {
        <div class="detail-section">
            <p class="detail-section-title">
                "Checklist " <span>{format!("{}/{}", card.checklist_done(), card.checklists.len())}</span>
            </p>
            <div class="detail-list">
                {card.checklists.iter().map(|item| {
                    let toggle_card = card_id.clone();
                    let toggle_item = item.id.clone();
                    let remove_card = card_id.clone();
                    let remove_item = item.id.clone();
                    view! {
                        <div class="detail-row">
                            <label class=if item.checked { "check-label done" } else { "check-label" }>
                                <input
                                    type="checkbox"
                                    checked=item.checked
                                    on:change=move |_| {
                                        store::update_checklists(&store, &toggle_card, |items| {
                                            if let Some(entry) = items.iter_mut().find(|i| i.id == toggle_item) {
                                                entry.checked = !entry.checked;
                                            }
                                        });
                                    }
                                />
                                {item.text.clone()}
                            </label>
                            <DeleteConfirmButton
                                button_class="row-delete-btn"
                                on_confirm=Callback::new(move |_| {
                                    store::update_checklists(&store, &remove_card, |items| {
                                        items.retain(|i| i.id != remove_item);
                                    });
                                })
                            />
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="detail-add-row">
                <input
                    type="text"
                    placeholder="Add checklist item..."
                    prop:value=move || new_check.get()
                    on:input=move |ev| set_new_check.set(event_target_value(&ev))
                />
                <button on:click=move |_| on_add.run(())>"Add"</button>
            </div>
        </div>
    }
}

#[component]
fn CommentsSection(
    card: Card,
    on_add: Callback<()>,
    new_comment: ReadSignal<String>,
    set_new_comment: WriteSignal<String>,
) -> impl IntoView {
    let store = use_app_store();
    let card_id = card.id.clone();

    view! {
        <div class="detail-section">
            <p class="detail-section-title">"Comments"</p>
            <div class="detail-list">
                {card.comments.iter().map(|comment| {
                    let remove_card = card_id.clone();
                    let remove_comment = comment.id.clone();
                    view! {
                        <div class="detail-row">
                            <div class="comment-body">
                                <p>{comment.text.clone()}</p>
                                <p class="comment-meta">
                                    {comment.author.clone()} " · "
                                    {comment.posted_at.format("%Y-%m-%d").to_string()}
                                </p>
                            </div>
                            <DeleteConfirmButton
                                button_class="row-delete-btn"
                                on_confirm=Callback::new(move |_| {
                                    store::update_card(&store, &remove_card, |card| {
                                        card.comments.retain(|c| c.id != remove_comment);
                                    });
                                })
                            />
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="detail-add-row">
                <input
                    type="text"
                    placeholder="Add comment..."
                    prop:value=move || new_comment.get()
                    on:input=move |ev| set_new_comment.set(event_target_value(&ev))
                />
                <button on:click=move |_| on_add.run(())>"Add"</button>
            </div>
        </div>
    }
}

#[component]
fn LinksSection(
    card: Card,
    on_add: Callback<()>,
    new_link: ReadSignal<String>,
    set_new_link: WriteSignal<String>,
) -> impl IntoView {
    let store = use_app_store();
    let card_id = card.id.clone();

    view! {
        <div class="detail-section">
            <p class="detail-section-title">"Links"</p>
            <div class="detail-list">
                {card.links.iter().map(|link| {
                    let remove_card = card_id.clone();
                    let remove_link = link.clone();
                    view! {
                        <div class="detail-row">
                            <a href=link.clone() target="_blank" rel="noreferrer" class="card-link">
                                {link.clone()}
                            </a>
                            <DeleteConfirmButton
                                button_class="row-delete-btn"
                                on_confirm=Callback::new(move |_| {
                                    store::update_card(&store, &remove_card, |card| {
                                        if let Some(at) = card.links.iter().position(|l| l == &remove_link) {
                                            card.links.remove(at);
                                        }
                                    });
                                })
                            />
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="detail-add-row">
                <input
                    type="url"
                    placeholder="Add link..."
                    prop:value=move || new_link.get()
                    on:input=move |ev| set_new_link.set(event_target_value(&ev))
                />
                <button on:click=move |_| on_add.run(())>"Add"</button>
            </div>
        </div>
    }
}

#[component]
fn AttachmentsSection(card: Card) -> impl IntoView {
    let store = use_app_store();
    let card_id = card.id.clone();

    let upload_card_id = card_id.clone();
    let on_files = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(files) = input.files() else { return };
        for index in 0..files.length() {
            let Some(file) = files.get(index) else { continue };
            let card_id = upload_card_id.clone();
            spawn_local(async move {
                let Ok(buffer) = JsFuture::from(file.array_buffer()).await else { return };
                let data = js_sys::Uint8Array::new(&buffer).to_vec();
                let id = store::next_id(&store, "file");
                store::update_card(&store, &card_id, |card| {
                    card.attachments.push(Attachment {
                        id,
                        name: file.name(),
                        size: file.size() as u64,
                        mime: file.type_(),
                        uploaded_on: Utc::now().date_naive(),
                        comments: Vec::new(),
                        data,
                    });
                });
            });
        }
        input.set_value("");
    };

    view! {
        <div class="detail-section">
            <p class="detail-section-title">"Attachments"</p>
            <label class="upload-zone">
                "Choose files"
                <input type="file" multiple class="file-input" on:change=on_files />
            </label>
            <div class="detail-list">
                {card.attachments.iter().map(|att| {
                    let download_att = att.clone();
                    let remove_card = card_id.clone();
                    let remove_att = att.id.clone();
                    let comment_card = card_id.clone();
                    let comment_att = att.id.clone();
                    let (att_comment, set_att_comment) = signal(String::new());

                    view! {
                        <div class="attachment-row">
                            <div class="detail-row">
                                <div class="attachment-info">
                                    <p class="attachment-name">{att.name.clone()}</p>
                                    <p class="attachment-meta">
                                        {format_file_size(att.size)} " · "
                                        {att.uploaded_on.format("%Y-%m-%d").to_string()}
                                    </p>
                                </div>
                                <div class="attachment-actions">
                                    <button
                                        class="download-btn"
                                        title="Download"
                                        on:click=move |_| download_attachment(&download_att)
                                    >
                                        "⬇"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="row-delete-btn"
                                        on_confirm=Callback::new(move |_| {
                                            store::update_card(&store, &remove_card, |card| {
                                                card.attachments.retain(|a| a.id != remove_att);
                                            });
                                        })
                                    />
                                </div>
                            </div>
                            <div class="attachment-comments">
                                {att.comments.iter().enumerate().map(|(index, text)| {
                                    let comment_card = comment_card.clone();
                                    let comment_att = comment_att.clone();
                                    view! {
                                        <div class="detail-row">
                                            <p>{text.clone()}</p>
                                            <button
                                                class="row-delete-btn"
                                                on:click=move |_| {
                                                    store::update_card(&store, &comment_card, |card| {
                                                        if let Some(a) = card.attachments.iter_mut().find(|a| a.id == comment_att) {
                                                            if index < a.comments.len() {
                                                                a.comments.remove(index);
                                                            }
                                                        }
                                                    });
                                                }
                                            >
                                                "×"
                                            </button>
                                        </div>
                                    }
                                }).collect_view()}
                                <div class="detail-add-row">
                                    <input
                                        type="text"
                                        placeholder="Add comment..."
                                        prop:value=move || att_comment.get()
                                        on:input=move |ev| set_att_comment.set(event_target_value(&ev))
                                    />
                                    <button on:click={
                                        let comment_card = comment_card.clone();
                                        let comment_att = comment_att.clone();
                                        move |_| {
                                            let text = att_comment.get();
                                            if text.trim().is_empty() {
                                                return;
                                            }
                                            store::update_card(&store, &comment_card, |card| {
                                                if let Some(a) = card.attachments.iter_mut().find(|a| a.id == comment_att) {
                                                    a.comments.push(text.trim().to_string());
                                                }
                                            });
                                            set_att_comment.set(String::new());
                                        }
                                    }>"Add"</button>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Materialize an attachment as a Blob object URL and click a temporary
/// anchor at it.
fn download_attachment(attachment: &Attachment) {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(attachment.data.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&attachment.mime);

    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else { return };

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(&attachment.name);
                anchor.click();
            }
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
