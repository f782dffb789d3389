use dioxus::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn AppLayout(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Header {}
            div {
                class: "flex",
                Sidebar {}
                main {
                    class: "flex-1 p-6",
                    {children}
                }
            }
        }
    }
}
