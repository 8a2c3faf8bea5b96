//! 음식배달 (food delivery) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn food_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "음식배달".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["식욕", "빠름", "편리함", "신선함", "즐거움"]),
            target_feeling: "맛있는 음식을 빠르고 편리하게 주문할 수 있다는 확신".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "🍔 Menu Components",
                "🛒 Cart & Checkout",
                "📱 Mobile Order",
                "🚚 Tracking Flow",
            ]),
            naming_rule: "Component/Context/State (예: MenuItem/Featured/Selected)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 16px gutter (tight for menu density)".to_string(),
                spacing_scale: vec![4, 8, 12, 16, 20, 24, 32, 40, 48],
                radius_scale: vec![12, 16, 20, 24, 28],
                type_scale_tokens: strings(&[
                    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl",
                    "text-3xl",
                ]),
                breakpoints: strings(&["mobile: 360px", "tablet: 768px", "desktop: 1024px"]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 64,
                structure: strings(&["Logo", "Location Selector", "Search", "Cart", "Profile"]),
                sticky_behavior: "always sticky with cart count badge".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-4 lg:px-8".to_string(),
                    max_width: "max-w-[1400px]".to_string(),
                    nav_items: 5,
                },
                mobile: HeaderMobile {
                    pattern: "Fixed bottom bar with cart".to_string(),
                    height_px: 60,
                },
                tailwind_example: "bg-white shadow-md sticky top-0 z-50 h-16 flex items-center justify-between px-4".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Hero Image",
                    "Delivery Address Input",
                    "Popular Categories",
                    "Promo Banner",
                ]),
                desktop_grid: "Full-width with overlay search".to_string(),
                mobile_stack: "compact with prominent address input".to_string(),
                padding: "py-12 md:py-16".to_string(),
                background: "Food photography with warm overlay".to_string(),
                image_style: "Appetizing food photos, high quality".to_string(),
                tailwind_example: "relative bg-gradient-to-b from-red-600 to-orange-500 py-12 md:py-16 px-4 text-white".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&[
                    "Restaurant Partnership",
                    "Delivery Info",
                    "Support",
                    "App Download",
                ]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "사업자정보", "배달정책"]),
                tailwind_example: "bg-gray-900 text-gray-300 py-12 px-4 mt-16".to_string(),
            },

            sections: vec![
                Section::new(
                    "Category Grid",
                    "음식 카테고리 빠른 탐색",
                    "Icon grid, horizontal scroll on mobile",
                    "py-8 px-4 overflow-x-auto flex md:grid md:grid-cols-8 gap-4",
                ),
                Section::new(
                    "Restaurant List",
                    "레스토랑 목록 표시",
                    "Card list with image, rating, delivery time",
                    "py-12 px-4 grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                ),
                Section::new(
                    "Special Offers",
                    "프로모션으로 주문 유도",
                    "Banner carousel with countdown",
                    "bg-yellow-50 py-8 px-4 overflow-x-auto flex gap-4",
                ),
                Section::new(
                    "Near You",
                    "근처 맛집 추천",
                    "Map view + list toggle",
                    "py-16 px-4 space-y-6",
                ),
                Section::new(
                    "Top Rated",
                    "인기 메뉴/레스토랑",
                    "Horizontal scroll cards with ratings",
                    "py-12 px-4 overflow-x-auto flex gap-4",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#EF4444"),
            secondary: generate_color_scale("#F59E0B"),
            gray: generate_color_scale("#6B7280"),
            usage_rules: UsageRules {
                primary_use: "Order Now, Add to Cart 버튼, 프로모션".to_string(),
                secondary_use: "별점, 할인 태그, 포인트".to_string(),
                surface_bg: "white for menu, gray-50 for sections".to_string(),
                border: "gray-200 for card separation".to_string(),
                text_strong: "gray-900 for menu names and prices".to_string(),
                text_weak: "gray-600 for descriptions".to_string(),
            },
            accessibility_notes: strings(&[
                "가격은 bold로 명확히 표시",
                "배달 시간은 아이콘+텍스트 병행",
                "장바구니 카운트는 명확한 배지로 표시",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Spoqa Han Sans (음식 이름 가독성 좋음)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("38px", 700, "1.2", "-0.02em"),
                h2: TypographyScale::new("28px", 700, "1.3", "-0.01em"),
                h3: TypographyScale::new("22px", 600, "1.4", "0"),
                body: TypographyScale::new("15px", 400, "1.6", "0"),
                caption: TypographyScale::new("13px", 400, "1.5", "0"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 48,
                    padding: "px-6 py-3".to_string(),
                    radius: "rounded-2xl".to_string(),
                    bg: "bg-primary-600".to_string(),
                    text: "text-white font-bold".to_string(),
                    hover: "hover:bg-primary-700 hover:scale-105 transition-all duration-200".to_string(),
                    disabled: "disabled:bg-gray-300 disabled:scale-100".to_string(),
                    tailwind: "bg-primary-600 text-white font-bold px-6 py-3 rounded-2xl hover:bg-primary-700 hover:scale-105 transition-all".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 48,
                    padding: "px-6 py-3".to_string(),
                    radius: "rounded-2xl".to_string(),
                    border: "border-2 border-gray-300".to_string(),
                    bg: None,
                    text: "text-gray-700 font-semibold".to_string(),
                    hover: "hover:border-primary-600 hover:text-primary-600 transition-colors".to_string(),
                    disabled: "disabled:border-gray-200 disabled:text-gray-400".to_string(),
                    tailwind: "border-2 border-gray-300 text-gray-700 font-semibold px-6 py-3 rounded-2xl hover:border-primary-600".to_string(),
                },
            },
            input: Input {
                height_px: 48,
                radius: "rounded-2xl".to_string(),
                border: "border-2 border-gray-200".to_string(),
                placeholder: "placeholder:text-gray-400".to_string(),
                focus_ring: "focus:ring-2 focus:ring-primary-400 focus:border-primary-400".to_string(),
                tailwind: "w-full h-12 px-4 border-2 border-gray-200 rounded-2xl focus:ring-2 focus:ring-primary-400".to_string(),
            },
            card: Card {
                radius: "rounded-3xl".to_string(),
                padding: "p-0".to_string(),
                shadow: "shadow-sm hover:shadow-2xl transition-all duration-300".to_string(),
                border: "border border-gray-100".to_string(),
                tailwind: "bg-white rounded-3xl overflow-hidden border border-gray-100 shadow-sm hover:shadow-2xl transition-all cursor-pointer".to_string(),
            },
        },

        tailwind_mapping: TailwindMapping {
            tailwind_config_extend: TailwindConfigExtend {
                colors: TailwindColors {
                    primary: "colors.primary".to_string(),
                    secondary: "colors.secondary".to_string(),
                    gray: "colors.gray".to_string(),
                },
                font_family: TailwindFontFamily {
                    sans: strings(&["Pretendard", "system-ui"]),
                },
                aspect_ratio: None,
            },
            class_snippets: ClassSnippets {
                container: "max-w-[1400px] mx-auto px-4 lg:px-8".to_string(),
                header: "bg-white shadow-md sticky top-0 z-50 h-16 flex items-center justify-between px-4".to_string(),
                hero: "relative bg-gradient-to-b from-red-600 to-orange-500 py-12 md:py-16 px-4 text-white".to_string(),
                primary_button: "bg-primary-600 text-white font-bold px-6 py-3 rounded-2xl hover:bg-primary-700 hover:scale-105 transition-all".to_string(),
                secondary_button: "border-2 border-gray-300 text-gray-700 font-semibold px-6 py-3 rounded-2xl hover:border-primary-600".to_string(),
                card: "bg-white rounded-3xl overflow-hidden border border-gray-100 shadow-sm hover:shadow-2xl transition-all cursor-pointer".to_string(),
                input: "w-full h-12 px-4 border-2 border-gray-200 rounded-2xl focus:ring-2 focus:ring-primary-400".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "음식 이미지는 lazy loading + placeholder",
                "실시간 배달 추적은 WebSocket 활용",
                "장바구니는 persistent state로 유지",
                "위치 기반 서비스는 Geolocation API",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "primary가 빨간색(#EF4444)",
                    "음식배달은 식욕을 자극하는 빨강/주황 계열이 효과적. 긴급성도 표현",
                ),
                VariationPoint::new(
                    "Components",
                    "Card radius가 rounded-3xl로 매우 둥글게",
                    "음식 사진이 부드럽고 맛있어 보이도록 유기적 형태",
                ),
                VariationPoint::new(
                    "Layout",
                    "위치 선택 기능 헤더에 고정",
                    "배달 서비스는 위치가 핵심. 항상 접근 가능해야 함",
                ),
                VariationPoint::new(
                    "Sections",
                    "Special Offers 섹션 강조",
                    "프로모션과 할인이 주문 전환율에 직접 영향",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 grid 시스템",
                "Mobile-first 접근",
                "접근성 기준 준수",
                "일관된 spacing scale",
            ]),
        },
    }
}
