use log::{debug, error};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::mail::{self, MailDraft};

pub enum ChatWidgetMsg {
    Toggle,
    Close,
    SetMessage(String),
    Submit,
}

pub struct ChatWidget {
    expanded: bool,
    message: String,
}

impl ChatWidget {
    /// Blank messages leave the panel untouched. Anything else empties the
    /// box and collapses the panel.
    fn take_draft(&mut self) -> Option<MailDraft> {
        let draft = mail::chat_mail(&self.message)?;
        self.message.clear();
        self.expanded = false;
        Some(draft)
    }
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            expanded: false,
            message: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                self.expanded = !self.expanded;
                debug!("chat widget expanded: {}", self.expanded);
                true
            }
            ChatWidgetMsg::Close => {
                self.expanded = false;
                true
            }
            ChatWidgetMsg::SetMessage(message) => {
                self.message = message;
                true
            }
            ChatWidgetMsg::Submit => {
                let Some(draft) = self.take_draft() else {
                    return false;
                };
                if let Err(e) = mail::hand_off(&draft) {
                    error!("Chat hand-off failed: {}", e);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_: MouseEvent| ChatWidgetMsg::Toggle);
        let close = ctx.link().callback(|_: MouseEvent| ChatWidgetMsg::Close);
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ChatWidgetMsg::SetMessage(input.value())
        });
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatWidgetMsg::Submit
        });

        html! {
            <>
                <button class="chat-toggle" onclick={toggle} aria-label="Open chat">
                    {"💬"}
                </button>

                if self.expanded {
                    <div class="chat-panel">
                        <div class="chat-header">
                            <h3>{"Chat with us"}</h3>
                            <button class="chat-close" onclick={close} aria-label="Close chat">
                                {"✕"}
                            </button>
                        </div>
                        <form class="chat-form" {onsubmit}>
                            <textarea
                                placeholder="How can we help you?"
                                value={self.message.clone()}
                                {oninput}
                                required=true
                            />
                            <button type="submit" class="chat-send">
                                {"➤ Send Message"}
                            </button>
                        </form>
                    </div>
                }
                <style>
                    {r#"
                        .chat-toggle {
                            position: fixed;
                            bottom: 1.5rem;
                            right: 1.5rem;
                            width: 3.5rem;
                            height: 3.5rem;
                            border: none;
                            border-radius: 50%;
                            background: linear-gradient(90deg, #34d399, #3b82f6);
                            color: #fff;
                            font-size: 1.5rem;
                            box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                            cursor: pointer;
                            z-index: 50;
                            transition: transform 0.2s ease;
                        }
                        .chat-toggle:hover {
                            transform: scale(1.1);
                        }
                        .chat-panel {
                            position: fixed;
                            bottom: 6rem;
                            right: 1.5rem;
                            width: 20rem;
                            background: rgba(255, 255, 255, 0.1);
                            border: 1px solid rgba(255, 255, 255, 0.1);
                            border-radius: 16px;
                            backdrop-filter: blur(24px);
                            overflow: hidden;
                            z-index: 50;
                            animation: chatSlideUp 0.3s ease-out;
                        }
                        .chat-header {
                            display: flex;
                            justify-content: space-between;
                            align-items: center;
                            padding: 1rem;
                            background: linear-gradient(90deg, #34d399, #3b82f6);
                        }
                        .chat-header h3 {
                            color: #fff;
                            font-weight: 600;
                        }
                        .chat-close {
                            background: none;
                            border: none;
                            color: rgba(255, 255, 255, 0.8);
                            cursor: pointer;
                            font-size: 1.1rem;
                        }
                        .chat-form {
                            padding: 1rem;
                        }
                        .chat-form textarea {
                            width: 100%;
                            height: 8rem;
                            resize: none;
                            padding: 0.75rem;
                            border-radius: 12px;
                            border: 1px solid rgba(255, 255, 255, 0.1);
                            background: rgba(255, 255, 255, 0.05);
                            color: #fff;
                        }
                        .chat-send {
                            width: 100%;
                            margin-top: 0.75rem;
                            padding: 0.5rem;
                            border: none;
                            border-radius: 12px;
                            background: linear-gradient(90deg, #34d399, #3b82f6);
                            color: #fff;
                            cursor: pointer;
                        }
                        @keyframes chatSlideUp {
                            from { opacity: 0; transform: translateY(100px) scale(0.9); }
                            to { opacity: 1; transform: none; }
                        }
                    "#}
                </style>
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with(message: &str) -> ChatWidget {
        ChatWidget {
            expanded: true,
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_message_keeps_panel_open() {
        let mut widget = open_with("   ");
        assert!(widget.take_draft().is_none());
        assert!(widget.expanded);
        assert_eq!(widget.message, "   ");
    }

    #[test]
    fn sending_clears_and_closes() {
        let mut widget = open_with("help");
        let draft = widget.take_draft().expect("draft");
        assert_eq!(draft.body, "help");
        assert!(!widget.expanded);
        assert!(widget.message.is_empty());
    }
}
