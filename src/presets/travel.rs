//! 여행 (travel & tourism) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn travel_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "여행".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["모험", "자유", "경험", "발견", "설렘"]),
            target_feeling: "새로운 여행지를 발견하고 특별한 경험을 계획하는 즐거움".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "✈️ Booking Components",
                "🗺️ Destination Pages",
                "📱 Mobile Travel",
                "📸 Gallery & Reviews",
            ]),
            naming_rule: "Component/Category/State (예: DestinationCard/Adventure/Featured)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 24px gutter".to_string(),
                spacing_scale: vec![8, 16, 24, 32, 40, 48, 64, 80, 96],
                radius_scale: vec![12, 16, 20, 24, 32],
                type_scale_tokens: strings(&[
                    "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl",
                    "text-4xl", "text-5xl",
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
                height_px: 72,
                structure: strings(&[
                    "Logo",
                    "Destinations",
                    "Experiences",
                    "Deals",
                    "My Trips",
                    "Sign In",
                ]),
                sticky_behavior: "transparent to solid on scroll".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-6 lg:px-12".to_string(),
                    max_width: "max-w-[1600px]".to_string(),
                    nav_items: 6,
                },
                mobile: HeaderMobile {
                    pattern: "Minimal with search focus".to_string(),
                    height_px: 64,
                },
                tailwind_example: "bg-white/90 backdrop-blur-lg border-b border-gray-200 sticky top-0 z-50 h-18 flex items-center justify-between px-6".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Full-width Image/Video",
                    "Search Widget",
                    "Popular Destinations",
                    "Inspire Me",
                ]),
                desktop_grid: "Full-bleed with centered search".to_string(),
                mobile_stack: "vertical with search prominent".to_string(),
                padding: "py-0 (full-bleed)".to_string(),
                background: "Stunning destination photography".to_string(),
                image_style: "Wanderlust-inspiring travel photography".to_string(),
                tailwind_example: "relative h-screen bg-cover bg-center flex items-center justify-center".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&["Destinations", "Travel Tips", "About", "Support"]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "취소/환불정책", "여행약관"]),
                tailwind_example: "bg-gray-50 py-16 px-6 mt-24 border-t border-gray-200".to_string(),
            },

            sections: vec![
                Section::new(
                    "Popular Destinations",
                    "인기 여행지 소개",
                    "Masonry grid with stunning photos",
                    "py-20 px-6 columns-2 md:columns-3 gap-6",
                ),
                Section::new(
                    "Travel Experiences",
                    "특별한 경험 제안",
                    "Category cards with icons",
                    "py-20 px-6 grid md:grid-cols-4 gap-8",
                ),
                Section::new(
                    "Deals & Packages",
                    "특가 상품 홍보",
                    "Horizontal scroll with badges",
                    "bg-blue-50 py-16 px-6 overflow-x-auto flex gap-6",
                ),
                Section::new(
                    "Travel Stories",
                    "여행 후기로 영감 제공",
                    "Blog-style cards with user photos",
                    "py-20 px-6 grid md:grid-cols-3 gap-8",
                ),
                Section::new(
                    "Travel Planning Guide",
                    "여행 계획 도움",
                    "Step-by-step with visuals",
                    "bg-white py-20 px-6 max-w-5xl mx-auto space-y-12",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#0EA5E9"),
            secondary: generate_color_scale("#F59E0B"),
            gray: generate_color_scale("#64748B"),
            usage_rules: UsageRules {
                primary_use: "Book Now, 주요 CTA, 링크".to_string(),
                secondary_use: "할인 태그, 특가 강조, 별점".to_string(),
                surface_bg: "white for clean photo focus".to_string(),
                border: "gray-200 for subtle division".to_string(),
                text_strong: "gray-900 for headings".to_string(),
                text_weak: "gray-600 for details".to_string(),
            },
            accessibility_notes: strings(&[
                "사진 위 텍스트는 그림자나 오버레이로 가독성 확보",
                "가격 정보는 명확한 대비",
                "예약 버튼은 충분한 크기",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Poppins (글로벌 여행 브랜드)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("56px", 700, "1.1", "-0.02em"),
                h2: TypographyScale::new("40px", 600, "1.2", "-0.01em"),
                h3: TypographyScale::new("28px", 600, "1.3", "0"),
                body: TypographyScale::new("16px", 400, "1.7", "0"),
                caption: TypographyScale::new("14px", 400, "1.5", "0"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 52,
                    padding: "px-8 py-3.5".to_string(),
                    radius: "rounded-2xl".to_string(),
                    bg: "bg-primary-600".to_string(),
                    text: "text-white font-semibold text-lg".to_string(),
                    hover: "hover:bg-primary-700 hover:shadow-xl transition-all duration-200".to_string(),
                    disabled: "disabled:bg-gray-300".to_string(),
                    tailwind: "bg-primary-600 text-white font-semibold text-lg px-8 py-3.5 rounded-2xl hover:bg-primary-700 hover:shadow-xl transition-all".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 52,
                    padding: "px-8 py-3.5".to_string(),
                    radius: "rounded-2xl".to_string(),
                    border: "border-2 border-primary-600".to_string(),
                    bg: None,
                    text: "text-primary-600 font-semibold text-lg".to_string(),
                    hover: "hover:bg-primary-50 transition-colors duration-200".to_string(),
                    disabled: "disabled:border-gray-300 disabled:text-gray-300".to_string(),
                    tailwind: "border-2 border-primary-600 text-primary-600 font-semibold text-lg px-8 py-3.5 rounded-2xl hover:bg-primary-50".to_string(),
                },
            },
            input: Input {
                height_px: 52,
                radius: "rounded-2xl".to_string(),
                border: "border-2 border-gray-300".to_string(),
                placeholder: "placeholder:text-gray-400".to_string(),
                focus_ring: "focus:ring-2 focus:ring-primary-500 focus:border-primary-500".to_string(),
                tailwind: "w-full h-13 px-5 text-base border-2 border-gray-300 rounded-2xl focus:ring-2 focus:ring-primary-500".to_string(),
            },
            card: Card {
                radius: "rounded-3xl".to_string(),
                padding: "p-0".to_string(),
                shadow: "shadow-lg hover:shadow-2xl transition-all duration-300".to_string(),
                border: "border-0".to_string(),
                tailwind: "bg-white rounded-3xl overflow-hidden shadow-lg hover:shadow-2xl hover:-translate-y-1 transition-all cursor-pointer".to_string(),
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
                container: "max-w-[1600px] mx-auto px-6 lg:px-12".to_string(),
                header: "bg-white/90 backdrop-blur-lg border-b border-gray-200 sticky top-0 z-50 h-18 flex items-center justify-between px-6".to_string(),
                hero: "relative h-screen bg-cover bg-center flex items-center justify-center".to_string(),
                primary_button: "bg-primary-600 text-white font-semibold text-lg px-8 py-3.5 rounded-2xl hover:bg-primary-700 hover:shadow-xl transition-all".to_string(),
                secondary_button: "border-2 border-primary-600 text-primary-600 font-semibold text-lg px-8 py-3.5 rounded-2xl hover:bg-primary-50".to_string(),
                card: "bg-white rounded-3xl overflow-hidden shadow-lg hover:shadow-2xl hover:-translate-y-1 transition-all cursor-pointer".to_string(),
                input: "w-full h-13 px-5 text-base border-2 border-gray-300 rounded-2xl focus:ring-2 focus:ring-primary-500".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "고해상도 여행 사진 필수 (lazy loading)",
                "지도 통합 (Google Maps/Mapbox)",
                "날짜 선택은 date picker로 UX 개선",
                "Review 섹션은 별점 + 사진으로 신뢰도 향상",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "하늘색 계열 (#0EA5E9)",
                    "여행의 자유와 하늘, 바다를 상징. 모험적이고 개방적인 느낌",
                ),
                VariationPoint::new(
                    "Layout",
                    "Masonry grid로 다양한 이미지 비율",
                    "여행 사진은 다양한 비율. Pinterest 스타일로 영감 제공",
                ),
                VariationPoint::new(
                    "Components",
                    "매우 둥근 radius (rounded-3xl)",
                    "친근하고 따뜻한 느낌. 여행의 즐거움 표현",
                ),
                VariationPoint::new(
                    "Typography",
                    "Line height 1.7로 넉넉함",
                    "여행 스토리는 읽기 편해야 함",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 grid 시스템",
                "접근성 기준 준수",
                "Mobile-first 접근",
                "일관된 spacing",
            ]),
        },
    }
}
