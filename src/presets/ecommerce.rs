//! 이커머스 (e-commerce) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn ecommerce_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "이커머스".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["활기", "편의성", "직관성", "구매욕구", "친근함"]),
            target_feeling: "쇼핑의 즐거움과 편리함을 동시에 제공하여 구매 전환 유도".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "🛍️ Product Components",
                "🛒 Cart & Checkout",
                "📱 Mobile Shop",
                "💳 Payment Flow",
            ]),
            naming_rule: "Component/Type/State (예: ProductCard/Featured/Hover)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 16px gutter (tighter for product density)".to_string(),
                spacing_scale: vec![4, 8, 12, 16, 20, 24, 32, 40, 48, 64],
                radius_scale: vec![8, 12, 16, 20, 24],
                type_scale_tokens: strings(&[
                    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl",
                    "text-3xl",
                ]),
                breakpoints: strings(&[
                    "mobile: 360px",
                    "tablet: 768px",
                    "desktop: 1024px",
                    "wide: 1440px",
                ]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 64,
                structure: strings(&[
                    "Logo",
                    "Search Bar (prominent)",
                    "Categories",
                    "Cart Icon",
                    "User Account",
                ]),
                sticky_behavior: "always sticky with mini search on scroll".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-4 lg:px-8".to_string(),
                    max_width: "max-w-[1600px]".to_string(),
                    nav_items: 8,
                },
                mobile: HeaderMobile {
                    pattern: "Bottom navigation bar for main actions".to_string(),
                    height_px: 56,
                },
                tailwind_example: "bg-white shadow-sm sticky top-0 z-50 h-16 flex items-center justify-between px-4 lg:px-8".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Hero Banner (Carousel)",
                    "Sale Badge",
                    "Shop Now CTA",
                    "Trending Items Preview",
                ]),
                desktop_grid: "Full-width carousel with overlay text".to_string(),
                mobile_stack: "full-bleed images with compact CTA".to_string(),
                padding: "py-0 (full-bleed hero)".to_string(),
                background: "Dynamic images with gradient overlay".to_string(),
                image_style: "Lifestyle product photography, vibrant and aspirational".to_string(),
                tailwind_example: "relative w-full h-[500px] md:h-[600px] bg-gradient-to-r from-black/40 to-transparent".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&[
                    "Customer Service",
                    "Shopping Info",
                    "Company Info",
                    "Social & App Links",
                ]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "전자금융거래약관", "사업자정보"]),
                tailwind_example: "bg-gray-100 py-12 px-4 mt-16 border-t border-gray-200".to_string(),
            },

            sections: vec![
                Section::new(
                    "Category Navigation",
                    "주요 카테고리로 빠른 탐색 유도",
                    "Horizontal scroll on mobile, grid on desktop, icon + label",
                    "py-8 px-4 overflow-x-auto flex md:grid md:grid-cols-6 gap-4",
                ),
                Section::new(
                    "Featured Products",
                    "추천 상품 노출로 구매 전환",
                    "4-column grid on desktop, 2-column on mobile, product cards with image + price + rating",
                    "py-12 px-4 grid grid-cols-2 md:grid-cols-4 gap-4 md:gap-6",
                ),
                Section::new(
                    "Flash Sale / Deals",
                    "한정 할인으로 긴급성 유발",
                    "Horizontal carousel with countdown timer",
                    "bg-red-50 py-8 px-4 overflow-x-auto flex gap-4",
                ),
                Section::new(
                    "Brand Story",
                    "브랜드 신뢰도 구축",
                    "2-column split (image + text)",
                    "py-16 px-4 grid md:grid-cols-2 gap-8 items-center",
                ),
                Section::new(
                    "Reviews & Ratings",
                    "사회적 증거로 구매 결정 지원",
                    "Card grid with user photos and ratings",
                    "py-12 px-4 grid md:grid-cols-3 gap-6",
                ),
                Section::new(
                    "Newsletter Signup",
                    "재방문 및 리타게팅을 위한 이메일 수집",
                    "Centered form with benefit list",
                    "bg-primary-600 text-white py-12 px-4 text-center",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#FF6B35"),
            secondary: generate_color_scale("#F7931E"),
            gray: generate_color_scale("#4A5568"),
            usage_rules: UsageRules {
                primary_use: "Add to Cart, Buy Now 버튼, Sale 태그, 중요 CTA".to_string(),
                secondary_use: "Wishlist, 보조 액션, 카테고리 강조".to_string(),
                surface_bg: "white for clean product focus, gray-50 for section separation".to_string(),
                border: "gray-200 for subtle division".to_string(),
                text_strong: "gray-900 for product names and prices".to_string(),
                text_weak: "gray-600 for descriptions, gray-500 for metadata".to_string(),
            },
            accessibility_notes: strings(&[
                "Price 텍스트는 최소 16px로 가독성 확보",
                "Sale 배지는 primary-600 배경에 white 텍스트로 7:1 대비",
                "터치 타겟은 최소 48x48px (모바일 제품 카드 클릭 영역)",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Inter (글로벌 이커머스 시 추천, 다국어 지원 우수)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("40px", 700, "1.2", "-0.02em"),
                h2: TypographyScale::new("32px", 700, "1.3", "-0.01em"),
                h3: TypographyScale::new("24px", 600, "1.4", "0"),
                body: TypographyScale::new("15px", 400, "1.6", "0"),
                caption: TypographyScale::new("13px", 400, "1.5", "0"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 48,
                    padding: "px-6 py-3".to_string(),
                    radius: "rounded-full".to_string(),
                    bg: "bg-primary-600".to_string(),
                    text: "text-white font-bold".to_string(),
                    hover: "hover:bg-primary-700 hover:scale-105 transition-all duration-200".to_string(),
                    disabled: "disabled:bg-gray-300 disabled:scale-100".to_string(),
                    tailwind: "bg-primary-600 text-white font-bold px-6 py-3 rounded-full hover:bg-primary-700 hover:scale-105 transition-all duration-200".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 48,
                    padding: "px-6 py-3".to_string(),
                    radius: "rounded-full".to_string(),
                    border: "border-2 border-gray-300".to_string(),
                    bg: None,
                    text: "text-gray-700 font-semibold".to_string(),
                    hover: "hover:border-primary-600 hover:text-primary-600 transition-colors duration-200".to_string(),
                    disabled: "disabled:border-gray-200 disabled:text-gray-400".to_string(),
                    tailwind: "border-2 border-gray-300 text-gray-700 font-semibold px-6 py-3 rounded-full hover:border-primary-600 hover:text-primary-600".to_string(),
                },
            },
            input: Input {
                height_px: 44,
                radius: "rounded-full".to_string(),
                border: "border-2 border-gray-200".to_string(),
                placeholder: "placeholder:text-gray-400".to_string(),
                focus_ring: "focus:ring-2 focus:ring-primary-400 focus:border-primary-400".to_string(),
                tailwind: "w-full h-11 px-4 border-2 border-gray-200 rounded-full focus:ring-2 focus:ring-primary-400 focus:border-primary-400".to_string(),
            },
            card: Card {
                radius: "rounded-2xl".to_string(),
                padding: "p-4".to_string(),
                shadow: "shadow-sm hover:shadow-xl transition-shadow duration-300".to_string(),
                border: "border border-gray-100".to_string(),
                tailwind: "bg-white rounded-2xl p-4 border border-gray-100 shadow-sm hover:shadow-xl transition-shadow duration-300 cursor-pointer".to_string(),
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
                container: "max-w-[1600px] mx-auto px-4 lg:px-8".to_string(),
                header: "bg-white shadow-sm sticky top-0 z-50 h-16 flex items-center justify-between px-4".to_string(),
                hero: "relative w-full h-[500px] md:h-[600px] bg-gradient-to-r from-black/40".to_string(),
                primary_button: "bg-primary-600 text-white font-bold px-6 py-3 rounded-full hover:bg-primary-700 hover:scale-105 transition-all".to_string(),
                secondary_button: "border-2 border-gray-300 text-gray-700 font-semibold px-6 py-3 rounded-full hover:border-primary-600".to_string(),
                card: "bg-white rounded-2xl p-4 border border-gray-100 shadow-sm hover:shadow-xl transition-shadow cursor-pointer".to_string(),
                input: "w-full h-11 px-4 border-2 border-gray-200 rounded-full focus:ring-2 focus:ring-primary-400".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "Product image lazy loading으로 초기 로딩 속도 최적화",
                "Intersection Observer로 무한 스크롤 구현",
                "hover:scale 효과로 인터랙티브한 쇼핑 경험 제공",
                "rounded-full 버튼으로 친근하고 모던한 느낌 강조",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "primary가 주황색 계열(#FF6B35)",
                    "이커머스는 구매 욕구를 자극하는 따뜻하고 활기찬 컬러가 효과적. 할인/세일 강조에 유리",
                ),
                VariationPoint::new(
                    "Components",
                    "Button radius가 rounded-full",
                    "친근하고 접근하기 쉬운 브랜드 이미지. 젊은 타겟층에게 어필",
                ),
                VariationPoint::new(
                    "Layout",
                    "Product grid가 촘촘함 (2-4 columns)",
                    "한 화면에 많은 상품을 노출해야 탐색과 비교가 용이. 정보 밀도가 높음",
                ),
                VariationPoint::new(
                    "Sections",
                    "Flash Sale/Deals 섹션 필수",
                    "긴급성(scarcity)과 한정성(urgency)을 활용한 전환 최적화 전략",
                ),
                VariationPoint::new(
                    "Header",
                    "Search Bar가 중앙에 크게 배치",
                    "이커머스는 검색 기반 탐색이 주요 사용 패턴. 검색창 접근성이 매출에 직결",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 grid 시스템은 업종 무관하게 표준",
                "Mobile-first 접근 (모바일 쇼핑 비중 증가 추세)",
                "접근성 기준(WCAG AA)은 모든 사용자를 위한 필수 요소",
                "일관된 spacing scale로 시각적 리듬 유지",
            ]),
        },
    }
}
