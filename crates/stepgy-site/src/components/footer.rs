use super::IconGlyph;
use leptos::*;
use stepgy_core::content::Footer as FooterContent;
use stepgy_core::Icon;

#[component]
pub fn Footer(brand: &'static str, footer: FooterContent) -> impl IntoView {
    let FooterContent { text, year } = footer;

    view! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="container mx-auto px-4">
                <div class="text-center">
                    <div class="flex items-center justify-center space-x-2 mb-4">
                        <div class="w-8 h-8 bg-green-600 rounded-lg flex items-center justify-center">
                            <IconGlyph icon=Icon::Zap class="w-5 h-5 text-white"/>
                        </div>
                        <span class="text-xl font-bold">{brand}</span>
                    </div>
                    <p class="text-gray-400 mb-4">{text}</p>
                    <p class="text-gray-500">{year}</p>
                </div>
            </div>
        </footer>
    }
}
