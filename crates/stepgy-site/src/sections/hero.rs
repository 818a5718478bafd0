use crate::components::IconGlyph;
use leptos::*;
use stepgy_core::content::Hero;
use stepgy_core::{Icon, SectionId};

#[component]
pub fn HeroSection(hero: Hero, cta_target: SectionId) -> impl IntoView {
    let Hero { title, subtitle, cta } = hero;
    let cta_href = format!("#{}", cta_target.anchor());

    view! {
        <div id="home" class="relative pt-32 pb-20 bg-gradient-to-br from-green-50 via-white to-green-100 overflow-hidden">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h1 class="text-5xl md:text-6xl font-bold text-gray-900 leading-tight">{title}</h1>
                        <p class="text-xl text-gray-600 mt-6">{subtitle}</p>
                        <a
                            href=cta_href
                            class="inline-block mt-8 px-8 py-4 bg-green-600 text-white rounded-lg font-semibold hover:bg-green-700 transition"
                        >
                            {cta}
                        </a>
                    </div>

                    // Pisada -> Energía
                    <div class="flex items-center justify-center space-x-6">
                        <div class="w-32 h-32 bg-white rounded-2xl shadow-xl flex flex-col items-center justify-center">
                            <IconGlyph icon=Icon::ArrowUp class="w-10 h-10 text-green-600"/>
                            <span class="mt-2 font-semibold text-gray-900">"Pisada"</span>
                        </div>
                        <IconGlyph icon=Icon::Zap class="w-8 h-8 text-yellow-500"/>
                        <div class="w-32 h-32 bg-green-600 rounded-2xl shadow-xl flex flex-col items-center justify-center">
                            <IconGlyph icon=Icon::Battery class="w-10 h-10 text-white"/>
                            <span class="mt-2 font-semibold text-white">"Energía"</span>
                        </div>
                    </div>
                </div>

                <div class="flex justify-center mt-16">
                    <a href=format!("#{}", SectionId::About.anchor()) class="text-gray-400 hover:text-green-600" aria-label="Scroll">
                        <IconGlyph icon=Icon::ChevronDown class="w-8 h-8 animate-bounce"/>
                    </a>
                </div>
            </div>
        </div>
    }
}
