use leptos::*;
use stepgy_core::content::TextBlock;

/// Heading plus a single paragraph. Used by "about" and "problem".
#[component]
pub fn TextSection(text: TextBlock) -> impl IntoView {
    let TextBlock { title, content } = text;

    view! {
        <div class="container mx-auto px-4 max-w-4xl text-center">
            <h2 class="text-4xl font-bold text-gray-900 mb-6">{title}</h2>
            <p class="text-lg text-gray-600 leading-relaxed">{content}</p>
        </div>
    }
}
