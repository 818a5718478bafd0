//! Navigation header

use super::IconGlyph;
use leptos::*;
use stepgy_core::page::NavItem;
use stepgy_core::Icon;

#[component]
pub fn MarketingNav(brand: &'static str, items: Vec<NavItem>) -> impl IntoView {
    let desktop = items
        .iter()
        .map(|item| {
            view! {
                <a href=item.href() class="text-gray-600 hover:text-green-600 transition">
                    {item.label}
                </a>
            }
        })
        .collect_view();

    let mobile = items
        .iter()
        .map(|item| {
            view! {
                <a href=item.href() class="block text-gray-600 hover:text-green-600">
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/95 backdrop-blur-md shadow-sm border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="#home" class="flex items-center space-x-2">
                        <div class="w-8 h-8 bg-green-600 rounded-lg flex items-center justify-center">
                            <IconGlyph icon=Icon::Zap class="w-5 h-5 text-white"/>
                        </div>
                        <span class="text-xl font-bold text-gray-900">{brand}</span>
                    </a>

                    // Desktop Nav
                    <nav class="hidden md:flex items-center space-x-8">
                        {desktop}
                    </nav>

                    // Mobile menu
                    <details class="md:hidden relative">
                        <summary class="list-none p-2 rounded-md text-gray-600 hover:bg-gray-100 cursor-pointer">
                            <IconGlyph icon=Icon::Menu class="h-6 w-6"/>
                        </summary>
                        <div class="absolute right-0 mt-2 w-48 bg-white border border-gray-200 rounded-lg shadow-lg px-4 py-4 space-y-3">
                            {mobile}
                        </div>
                    </details>
                </div>
            </div>
        </header>
    }
}
