//! 패션 (fashion) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn fashion_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "패션".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["스타일", "트렌드", "개성", "세련됨", "감각"]),
            target_feeling: "최신 트렌드와 개성있는 스타일을 표현하는 패션 플랫폼".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "👗 Product Components",
                "🛒 Shopping Experience",
                "📱 Mobile Fashion",
                "✨ Lookbook Pages",
            ]),
            naming_rule: "Component/Style/State (예: ProductCard/Editorial/Hover)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 20px gutter (visual spacing)".to_string(),
                spacing_scale: vec![4, 8, 12, 16, 24, 32, 48, 64, 80, 96],
                radius_scale: vec![0, 4, 8, 12, 16],
                type_scale_tokens: strings(&[
                    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl",
                    "text-3xl", "text-4xl", "text-5xl",
                ]),
                breakpoints: strings(&[
                    "mobile: 375px",
                    "tablet: 768px",
                    "desktop: 1280px",
                    "wide: 1920px",
                ]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 60,
                structure: strings(&[
                    "Logo", "Women", "Men", "New", "Sale", "Search", "Wishlist", "Bag",
                ]),
                sticky_behavior: "minimal sticky on scroll".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-6 lg:px-12".to_string(),
                    max_width: "max-w-[1920px]".to_string(),
                    nav_items: 8,
                },
                mobile: HeaderMobile {
                    pattern: "Minimal with hamburger + icons".to_string(),
                    height_px: 56,
                },
                tailwind_example: "bg-white border-b border-gray-100 sticky top-0 z-50 h-15 flex items-center justify-between px-6".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&["Full-Screen Image", "Minimal Text Overlay", "Shop Now CTA"]),
                desktop_grid: "Full-bleed editorial photography".to_string(),
                mobile_stack: "portrait orientation, text minimal".to_string(),
                padding: "py-0 (full-bleed)".to_string(),
                background: "Editorial fashion photography".to_string(),
                image_style: "High fashion photography, editorial style".to_string(),
                tailwind_example: "relative h-screen bg-cover bg-center flex items-end justify-center pb-20".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&["Customer Service", "About", "Social Media", "Newsletter"]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "교환/환불", "배송정책"]),
                tailwind_example: "bg-black text-white py-16 px-6 mt-24".to_string(),
            },

            sections: vec![
                Section::new(
                    "New Arrivals",
                    "신상품 강조",
                    "Masonry grid or 4-column with varied heights",
                    "py-20 px-6 columns-2 md:columns-4 gap-6",
                ),
                Section::new(
                    "Shop by Category",
                    "카테고리별 탐색",
                    "Large image tiles with overlay text",
                    "py-20 px-6 grid md:grid-cols-3 gap-8",
                ),
                Section::new(
                    "Trending Now",
                    "트렌드 아이템 소개",
                    "Horizontal scroll editorial layout",
                    "py-20 px-6 overflow-x-auto flex gap-8",
                ),
                Section::new(
                    "Lookbook",
                    "스타일링 제안",
                    "Full-width editorial spreads",
                    "py-20 space-y-20",
                ),
                Section::new(
                    "Brand Story",
                    "브랜드 아이덴티티 전달",
                    "Minimal text with large imagery",
                    "py-32 px-6 max-w-4xl mx-auto text-center space-y-12",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#EC4899"),
            secondary: generate_color_scale("#8B5CF6"),
            gray: generate_color_scale("#64748B"),
            usage_rules: UsageRules {
                primary_use: "CTA 버튼, Sale 태그, 강조 요소".to_string(),
                secondary_use: "보조 액션, 카테고리 태그".to_string(),
                surface_bg: "white for clean product focus, black for premium sections".to_string(),
                border: "gray-100 for subtle minimal borders".to_string(),
                text_strong: "black for product names".to_string(),
                text_weak: "gray-600 for details".to_string(),
            },
            accessibility_notes: strings(&[
                "제품 이미지 중심이므로 대체 텍스트 필수",
                "Sale/New 배지는 명확한 대비",
                "가격은 bold로 강조",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Helvetica Neue (미니멀 패션 브랜드) 또는 Bodoni (럭셔리 브랜드)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("64px", 300, "1.1", "-0.02em"),
                h2: TypographyScale::new("48px", 300, "1.2", "-0.01em"),
                h3: TypographyScale::new("32px", 400, "1.3", "0"),
                body: TypographyScale::new("15px", 400, "1.6", "0.01em"),
                caption: TypographyScale::new("13px", 400, "1.5", "0.02em"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 48,
                    padding: "px-8 py-3".to_string(),
                    radius: "rounded-none".to_string(),
                    bg: "bg-black".to_string(),
                    text: "text-white font-medium tracking-wide uppercase".to_string(),
                    hover: "hover:bg-gray-800 transition-colors duration-300".to_string(),
                    disabled: "disabled:bg-gray-300".to_string(),
                    tailwind: "bg-black text-white font-medium tracking-wide uppercase px-8 py-3 hover:bg-gray-800 transition-colors".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 48,
                    padding: "px-8 py-3".to_string(),
                    radius: "rounded-none".to_string(),
                    border: "border border-black".to_string(),
                    bg: None,
                    text: "text-black font-medium tracking-wide uppercase".to_string(),
                    hover: "hover:bg-black hover:text-white transition-all duration-300".to_string(),
                    disabled: "disabled:border-gray-300 disabled:text-gray-300".to_string(),
                    tailwind: "border border-black text-black font-medium tracking-wide uppercase px-8 py-3 hover:bg-black hover:text-white transition-all".to_string(),
                },
            },
            input: Input {
                height_px: 44,
                radius: "rounded-none".to_string(),
                border: "border-b-2 border-gray-300".to_string(),
                placeholder: "placeholder:text-gray-400".to_string(),
                focus_ring: "focus:border-black focus:outline-none".to_string(),
                tailwind: "w-full h-11 pb-2 border-b-2 border-gray-300 focus:border-black focus:outline-none bg-transparent".to_string(),
            },
            card: Card {
                radius: "rounded-none".to_string(),
                padding: "p-0".to_string(),
                shadow: "shadow-none".to_string(),
                border: "border-0".to_string(),
                tailwind: "bg-white group cursor-pointer".to_string(),
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
                container: "max-w-[1920px] mx-auto px-6 lg:px-12".to_string(),
                header: "bg-white border-b border-gray-100 sticky top-0 z-50 h-15 flex items-center justify-between px-6".to_string(),
                hero: "relative h-screen bg-cover bg-center flex items-end justify-center pb-20".to_string(),
                primary_button: "bg-black text-white font-medium tracking-wide uppercase px-8 py-3 hover:bg-gray-800 transition-colors".to_string(),
                secondary_button: "border border-black text-black font-medium tracking-wide uppercase px-8 py-3 hover:bg-black hover:text-white transition-all".to_string(),
                card: "bg-white group cursor-pointer".to_string(),
                input: "w-full h-11 pb-2 border-b-2 border-gray-300 focus:border-black focus:outline-none bg-transparent".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "이미지 비율 유지 (aspect-ratio) 필수",
                "Hover 시 이미지 줌 효과로 premium 느낌",
                "Minimal UI로 제품이 주인공",
                "Black & White 기본, 색상은 악센트로만",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "흑백 기반에 핑크 악센트",
                    "패션은 제품이 주인공. UI는 미니멀하게, 강조만 컬러",
                ),
                VariationPoint::new(
                    "Typography",
                    "Light weight (300) 사용, 큰 헤드라인",
                    "Editorial 스타일. 우아하고 세련된 느낌",
                ),
                VariationPoint::new(
                    "Components",
                    "rounded-none (직각)",
                    "미니멀 고급 브랜드는 직각 처리. 클래식하고 세련됨",
                ),
                VariationPoint::new(
                    "Layout",
                    "Full-bleed 이미지, Masonry grid",
                    "제품 사진 중심. 다양한 비율로 시각적 흥미",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 grid 시스템",
                "Mobile-first 접근",
                "접근성 기준 준수",
                "일관된 spacing",
            ]),
        },
    }
}
