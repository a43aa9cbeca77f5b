//! Embedded translation catalog.
//!
//! Each language has a flat key → string table. Keys are stable camelCase
//! identifiers shared by every language; placeholders use `{name}` syntax
//! and are filled by `format_text`.

use crate::i18n::Language;

/// All display strings for one language.
#[derive(Debug)]
pub struct Dictionary {
    language: Language,
    entries: &'static [(&'static str, &'static str)],
}

impl Dictionary {
    /// Build a dictionary from a static key table.
    pub const fn from_entries(
        language: Language,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { language, entries }
    }

    /// The language these strings are written in.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate keys in authoring order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Iterate `(key, text)` pairs in authoring order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Access point for the embedded dictionaries.
pub struct Catalog;

impl Catalog {
    /// Return the complete dictionary for a language. Never fails.
    pub fn lookup(language: Language) -> &'static Dictionary {
        match language {
            Language::Ja => &JAPANESE,
            Language::En => &ENGLISH,
            Language::Ko => &KOREAN,
        }
    }

    /// The dictionary every other language is checked against.
    pub fn reference() -> &'static Dictionary {
        Self::lookup(Language::DEFAULT)
    }
}

/// Substitute `{name}` placeholders in a template.
///
/// Placeholders without a matching argument are left untouched.
pub fn format_text(template: &str, args: &[(&str, &str)]) -> String {
    let mut text = template.to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{}}}", name), value);
    }
    text
}

// ==================== Japanese Strings ====================

static JAPANESE: Dictionary = Dictionary {
    language: Language::Ja,
    entries: &[
        // Navigation
        ("navPlans", "料金プラン"),
        ("navShowcase", "制作イメージ"),
        ("navTestimonials", "お客様の声"),
        ("navContact", "お問い合わせ"),
        ("navMenuOpen", "メニューを開く"),
        ("navMenuClose", "メニューを閉じる"),
        ("languageLabel", "言語"),
        // Hero
        ("heroBadge", "小さなお店・個人事業主向けWeb制作"),
        ("heroTitle", "あなたの想いが伝わるホームページを、最短2週間で。"),
        ("heroSubtitle", "ヒアリングから公開まで、専任デザイナーが伴走します。スマホでも見やすく、更新もかんたん。"),
        ("heroCta", "無料で相談する"),
        ("heroSecondaryCta", "料金プランを見る"),
        ("previewTitle", "制作の流れ"),
        ("previewTabDesktop", "パソコン表示"),
        ("previewTabMobile", "スマホ表示"),
        ("stepHearingTitle", "ヒアリング"),
        ("stepHearingBody", "オンラインで30分ほど、目的やイメージをお伺いします。"),
        ("stepDesignTitle", "デザイン"),
        ("stepDesignBody", "トップページのデザイン案をご提案し、修正を重ねて仕上げます。"),
        ("stepBuildTitle", "コーディング"),
        ("stepBuildBody", "全ページをスマホ対応で制作し、テスト環境で確認いただけます。"),
        ("stepLaunchTitle", "公開"),
        ("stepLaunchBody", "ドメイン設定から公開まで代行し、公開後の使い方もご案内します。"),
        // Plans
        ("plansTitle", "料金プラン"),
        ("plansSubtitle", "目的とご予算に合わせて選べる3つのプラン"),
        ("planPriceFrom", "{price}円〜"),
        ("planPopular", "人気No.1"),
        ("planViewDetails", "詳細を見る"),
        ("planApply", "このプランで申し込む"),
        ("planStarterName", "スタータープラン"),
        ("planStarterDescription", "まずは名刺代わりの1ページサイトから。"),
        ("planStarterFeature1", "1ページ構成のランディングページ"),
        ("planStarterFeature2", "スマホ対応"),
        ("planStarterFeature3", "お問い合わせフォーム設置"),
        ("planStandardName", "スタンダードプラン"),
        ("planStandardDescription", "お店や事業の魅力をしっかり伝える定番構成。"),
        ("planStandardFeature1", "最大5ページ構成"),
        ("planStandardFeature2", "お知らせ更新機能"),
        ("planStandardFeature3", "基本的なSEO設定"),
        ("planPremiumName", "プレミアムプラン"),
        ("planPremiumDescription", "集客まで見据えたオーダーメイドのサイト制作。"),
        ("planPremiumFeature1", "ページ数無制限"),
        ("planPremiumFeature2", "予約・決済機能の導入"),
        ("planPremiumFeature3", "公開後3か月の運用サポート"),
        // Showcase
        ("showcaseTitle", "プラン別の制作イメージ"),
        ("showcaseSubtitle", "各プランで作れるサイトの例をご覧ください。"),
        ("showcaseClose", "閉じる"),
        ("showcaseIncludes", "含まれる内容"),
        // Testimonials
        ("testimonialsTitle", "お客様の声"),
        ("testimonial1Quote", "丁寧にヒアリングしてもらい、想像以上のサイトになりました。予約も増えています。"),
        ("testimonial1Author", "佐藤様"),
        ("testimonial1Role", "美容室オーナー"),
        ("testimonial2Quote", "専門用語を使わずに説明してくれるので、初めてでも安心でした。"),
        ("testimonial2Author", "田中様"),
        ("testimonial2Role", "パン屋店主"),
        ("testimonial3Quote", "英語と韓国語のページも作ってもらい、海外からのお問い合わせが届くようになりました。"),
        ("testimonial3Author", "金様"),
        ("testimonial3Role", "ゲストハウス経営"),
        // Countdown
        ("countdownTitle", "キャンペーン終了まで"),
        ("countdownDays", "日"),
        ("countdownHours", "時間"),
        ("countdownMinutes", "分"),
        ("countdownSeconds", "秒"),
        ("countdownExpired", "キャンペーンは終了しました"),
        // Contact
        ("contactTitle", "お問い合わせ"),
        ("contactSubtitle", "ご相談・お見積りは無料です。お気軽にどうぞ。"),
        ("contactName", "お名前"),
        ("contactEmail", "メールアドレス"),
        ("contactPhone", "電話番号"),
        ("contactPhoneOptional", "任意"),
        ("contactMessage", "ご相談内容"),
        ("contactSubmit", "送信する"),
        ("contactSubmitting", "送信中..."),
        ("contactSuccess", "送信しました。2営業日以内にご連絡いたします。"),
        ("contactErrorGeneric", "送信に失敗しました。時間をおいて再度お試しください。"),
        ("contactErrorRequired", "「{field}」を入力してください。"),
        ("contactErrorEmail", "メールアドレスの形式が正しくありません。"),
        // External links
        ("linkSurvey", "事前アンケートに回答する"),
        ("linkBooking", "オンライン相談を予約する"),
        ("linkPayment", "お支払いページへ"),
        // Footer
        ("footerTagline", "想いが伝わるWebサイトを、すべての小さなお店に。"),
        ("footerCopyright", "© {year} Studio Site. All rights reserved."),
    ],
};

// ==================== English Strings ====================

static ENGLISH: Dictionary = Dictionary {
    language: Language::En,
    entries: &[
        // Navigation
        ("navPlans", "Plans"),
        ("navShowcase", "Showcase"),
        ("navTestimonials", "Testimonials"),
        ("navContact", "Contact"),
        ("navMenuOpen", "Open menu"),
        ("navMenuClose", "Close menu"),
        ("languageLabel", "Language"),
        // Hero
        ("heroBadge", "Web design for small shops and solo businesses"),
        ("heroTitle", "A website that tells your story, live in as little as two weeks."),
        ("heroSubtitle", "A dedicated designer guides you from the first call to launch. Mobile-friendly and easy to update."),
        ("heroCta", "Get a free consultation"),
        ("heroSecondaryCta", "See our plans"),
        ("previewTitle", "How it works"),
        ("previewTabDesktop", "Desktop view"),
        ("previewTabMobile", "Mobile view"),
        ("stepHearingTitle", "Discovery"),
        ("stepHearingBody", "A 30-minute online call to understand your goals and style."),
        ("stepDesignTitle", "Design"),
        ("stepDesignBody", "We propose a home page design and refine it with you."),
        ("stepBuildTitle", "Build"),
        ("stepBuildBody", "Every page is built mobile-first and shared on a preview site."),
        ("stepLaunchTitle", "Launch"),
        ("stepLaunchBody", "We handle the domain and go-live, then show you how to run it."),
        // Plans
        ("plansTitle", "Plans"),
        ("plansSubtitle", "Three plans to fit your goals and budget"),
        ("planPriceFrom", "From ¥{price}"),
        ("planPopular", "Most popular"),
        ("planViewDetails", "View details"),
        ("planApply", "Choose this plan"),
        ("planStarterName", "Starter"),
        ("planStarterDescription", "A single-page site that works like a business card."),
        ("planStarterFeature1", "One-page landing site"),
        ("planStarterFeature2", "Mobile-friendly layout"),
        ("planStarterFeature3", "Contact form"),
        ("planStandardName", "Standard"),
        ("planStandardDescription", "The classic setup to show what makes your business special."),
        ("planStandardFeature1", "Up to 5 pages"),
        ("planStandardFeature2", "News updates you can post yourself"),
        ("planStandardFeature3", "Basic SEO setup"),
        ("planPremiumName", "Premium"),
        ("planPremiumDescription", "A fully custom site built to bring in customers."),
        ("planPremiumFeature1", "Unlimited pages"),
        ("planPremiumFeature2", "Booking and payment integration"),
        ("planPremiumFeature3", "Three months of post-launch support"),
        // Showcase
        ("showcaseTitle", "What each plan looks like"),
        ("showcaseSubtitle", "Browse example sites built with each plan."),
        ("showcaseClose", "Close"),
        ("showcaseIncludes", "What's included"),
        // Testimonials
        ("testimonialsTitle", "What our clients say"),
        ("testimonial1Quote", "They listened carefully and the site turned out better than I imagined. Bookings are up."),
        ("testimonial1Author", "Ms. Sato"),
        ("testimonial1Role", "Hair salon owner"),
        ("testimonial2Quote", "Everything was explained without jargon, so I felt at ease as a first-timer."),
        ("testimonial2Author", "Mr. Tanaka"),
        ("testimonial2Role", "Bakery owner"),
        ("testimonial3Quote", "They built English and Korean pages too, and now inquiries arrive from abroad."),
        ("testimonial3Author", "Mr. Kim"),
        ("testimonial3Role", "Guesthouse manager"),
        // Countdown
        ("countdownTitle", "Campaign ends in"),
        ("countdownDays", "days"),
        ("countdownHours", "hours"),
        ("countdownMinutes", "minutes"),
        ("countdownSeconds", "seconds"),
        ("countdownExpired", "This campaign has ended"),
        // Contact
        ("contactTitle", "Contact us"),
        ("contactSubtitle", "Consultations and quotes are free. Just say hello."),
        ("contactName", "Name"),
        ("contactEmail", "Email"),
        ("contactPhone", "Phone"),
        ("contactPhoneOptional", "optional"),
        ("contactMessage", "How can we help?"),
        ("contactSubmit", "Send message"),
        ("contactSubmitting", "Sending..."),
        ("contactSuccess", "Thank you! We will reply within two business days."),
        ("contactErrorGeneric", "Something went wrong. Please try again in a moment."),
        ("contactErrorRequired", "Please fill in \"{field}\"."),
        ("contactErrorEmail", "Please enter a valid email address."),
        // External links
        ("linkSurvey", "Fill in the pre-consultation survey"),
        ("linkBooking", "Book an online consultation"),
        ("linkPayment", "Go to payment"),
        // Footer
        ("footerTagline", "Websites that speak for every small shop."),
        ("footerCopyright", "© {year} Studio Site. All rights reserved."),
    ],
};

// ==================== Korean Strings ====================

static KOREAN: Dictionary = Dictionary {
    language: Language::Ko,
    entries: &[
        // Navigation
        ("navPlans", "요금제"),
        ("navShowcase", "제작 예시"),
        ("navTestimonials", "고객 후기"),
        ("navContact", "문의하기"),
        ("navMenuOpen", "메뉴 열기"),
        ("navMenuClose", "메뉴 닫기"),
        ("languageLabel", "언어"),
        // Hero
        ("heroBadge", "작은 가게와 1인 사업자를 위한 웹 제작"),
        ("heroTitle", "당신의 이야기가 전해지는 홈페이지, 최단 2주 만에."),
        ("heroSubtitle", "상담부터 공개까지 전담 디자이너가 함께합니다. 모바일에서도 보기 좋고 업데이트도 간단합니다."),
        ("heroCta", "무료 상담 신청"),
        ("heroSecondaryCta", "요금제 보기"),
        ("previewTitle", "제작 과정"),
        ("previewTabDesktop", "PC 화면"),
        ("previewTabMobile", "모바일 화면"),
        ("stepHearingTitle", "상담"),
        ("stepHearingBody", "온라인으로 30분 정도 목적과 원하시는 이미지를 여쭙니다."),
        ("stepDesignTitle", "디자인"),
        ("stepDesignBody", "메인 페이지 디자인 시안을 제안하고 함께 다듬어 완성합니다."),
        ("stepBuildTitle", "코딩"),
        ("stepBuildBody", "모든 페이지를 모바일 대응으로 제작하고 테스트 환경에서 확인하실 수 있습니다."),
        ("stepLaunchTitle", "공개"),
        ("stepLaunchBody", "도메인 설정부터 공개까지 대행하고 공개 후 사용법도 안내해 드립니다."),
        // Plans
        ("plansTitle", "요금제"),
        ("plansSubtitle", "목적과 예산에 맞춰 고르는 3가지 요금제"),
        ("planPriceFrom", "{price}엔부터"),
        ("planPopular", "인기 1위"),
        ("planViewDetails", "자세히 보기"),
        ("planApply", "이 요금제로 신청하기"),
        ("planStarterName", "스타터"),
        ("planStarterDescription", "명함 대신 쓰는 1페이지 사이트부터 시작하세요."),
        ("planStarterFeature1", "1페이지 랜딩 사이트"),
        ("planStarterFeature2", "모바일 대응"),
        ("planStarterFeature3", "문의 폼 설치"),
        ("planStandardName", "스탠다드"),
        ("planStandardDescription", "가게와 사업의 매력을 제대로 전하는 기본 구성."),
        ("planStandardFeature1", "최대 5페이지 구성"),
        ("planStandardFeature2", "공지사항 직접 업데이트 기능"),
        ("planStandardFeature3", "기본 SEO 설정"),
        ("planPremiumName", "프리미엄"),
        ("planPremiumDescription", "집객까지 고려한 맞춤형 사이트 제작."),
        ("planPremiumFeature1", "페이지 수 무제한"),
        ("planPremiumFeature2", "예약·결제 기능 도입"),
        ("planPremiumFeature3", "공개 후 3개월 운영 지원"),
        // Showcase
        ("showcaseTitle", "요금제별 제작 예시"),
        ("showcaseSubtitle", "각 요금제로 만들 수 있는 사이트 예시를 확인하세요."),
        ("showcaseClose", "닫기"),
        ("showcaseIncludes", "포함 내용"),
        // Testimonials
        ("testimonialsTitle", "고객 후기"),
        ("testimonial1Quote", "꼼꼼하게 상담해 주셔서 기대 이상의 사이트가 완성됐어요. 예약도 늘었습니다."),
        ("testimonial1Author", "사토 님"),
        ("testimonial1Role", "미용실 원장"),
        ("testimonial2Quote", "어려운 용어 없이 설명해 주셔서 처음인데도 안심이 됐어요."),
        ("testimonial2Author", "다나카 님"),
        ("testimonial2Role", "빵집 사장"),
        ("testimonial3Quote", "영어와 한국어 페이지까지 만들어 주셔서 해외 문의가 들어오기 시작했습니다."),
        ("testimonial3Author", "김 님"),
        ("testimonial3Role", "게스트하우스 운영"),
        // Countdown
        ("countdownTitle", "캠페인 종료까지"),
        ("countdownDays", "일"),
        ("countdownHours", "시간"),
        ("countdownMinutes", "분"),
        ("countdownSeconds", "초"),
        ("countdownExpired", "캠페인이 종료되었습니다"),
        // Contact
        ("contactTitle", "문의하기"),
        ("contactSubtitle", "상담과 견적은 무료입니다. 부담 없이 연락 주세요."),
        ("contactName", "이름"),
        ("contactEmail", "이메일"),
        ("contactPhone", "전화번호"),
        ("contactPhoneOptional", "선택"),
        ("contactMessage", "상담 내용"),
        ("contactSubmit", "보내기"),
        ("contactSubmitting", "보내는 중..."),
        ("contactSuccess", "전송되었습니다. 영업일 기준 2일 이내에 연락드리겠습니다."),
        ("contactErrorGeneric", "전송에 실패했습니다. 잠시 후 다시 시도해 주세요."),
        ("contactErrorRequired", "'{field}' 항목을 입력해 주세요."),
        ("contactErrorEmail", "이메일 주소 형식이 올바르지 않습니다."),
        // External links
        ("linkSurvey", "사전 설문에 답하기"),
        ("linkBooking", "온라인 상담 예약하기"),
        ("linkPayment", "결제 페이지로"),
        // Footer
        ("footerTagline", "모든 작은 가게에 마음이 전해지는 웹사이트를."),
        ("footerCopyright", "© {year} Studio Site. All rights reserved."),
    ],
};
