use super::{
    Catalog, ContactChannel, ContactCopy, ContactKind, ExperienceEntry, HeroCopy, Project,
    Qualification, ShowcaseSkill, SkillCategory, SkillRating, SocialLink,
};
use crate::core::locale::Locale;
use crate::core::text::LocalizedText;

/// pt-BR, en-US, fr-FR.
macro_rules! tr {
    ($pt:expr, $en:expr, $fr:expr $(,)?) => {
        LocalizedText::Localized(&[
            (Locale::PtBr, $pt),
            (Locale::EnUs, $en),
            (Locale::FrFr, $fr),
        ])
    };
}

const fn same(text: &'static str) -> LocalizedText {
    LocalizedText::Plain(text)
}

/// Detail-panel artwork when the selected skill has none.
pub const DEFAULT_SKILL_IMAGE: &str = "/assets/skills/htmlcss.png";

pub(super) static CATALOG: Catalog = Catalog {
    owner: "Luiz Rodrigues",
    badge: "Luiz Rodrigues · Dev Front-end",
    avatar: "/assets/thumb/astro-2.png",
    hero: HERO,
    highlight_targets: &["front-end", "typescript", "flutter/dart"],
    about: ABOUT,
    qualifications: QUALIFICATIONS,
    experiences: EXPERIENCES,
    ratings: RATINGS,
    rating_names: RATING_NAMES,
    showcase: SHOWCASE,
    projects: PROJECTS,
    tech_logos: TECH_LOGOS,
    contact: CONTACT,
    socials: SOCIALS,
    channels: CHANNELS,
    resume_href: "/LuizRodriguesCV.pdf",
    email_href: "mailto:luizh4321@gmail.com",
    linkedin_href: "https://www.linkedin.com/in/luiz-rodrigues-372866256/",
};

const HERO: HeroCopy = HeroCopy {
    title: tr!(
        "Dev Front-end | React | Next.js | TypeScript | Node.js | Tailwind | Flutter/Dart",
        "Front-end Developer | React | Next.js | TypeScript | Node.js | Tailwind | Flutter/Dart",
        "Développeur Front-end | React | Next.js | TypeScript | Node.js | Tailwind | Flutter/Dart",
    ),
    subtitle: tr!(
        "Olá, sou Luiz Rodrigues, Desenvolvedor Front-end. Comecei em 2023 e venho aplicando JavaScript moderno, interfaces web e otimização de performance em projetos reais. Também exploro Flutter/Dart para experiências mobile.",
        "Hi, I'm Luiz Rodrigues, a Front-end Developer. I started in 2023 and have been applying modern JavaScript, web UI, and performance optimization in real projects. Also exploring Flutter/Dart (beginner) for mobile experiences.",
        "Salut, je suis Luiz Rodrigues, Développeur Front-end. J'ai commencé en 2023 et j'applique JavaScript moderne, interfaces web et optimisation des performances sur des projets réels. J'explore aussi Flutter/Dart (débutant) pour des expériences mobiles.",
    ),
    cta: tr!("Fale comigo", "Contact me", "Parler avec moi"),
    secondary_cta: tr!("Ver projetos", "View projects", "Voir les projets"),
};

const ABOUT: LocalizedText = tr!(
    "Estudante de Engenharia de Software (Unicesumar) desde 2024, motivado por aprender mais e ajudar as pessoas ao meu redor. Vejo software além do código: como ferramenta para resolver problemas reais e gerar impacto positivo. Busco evoluir habilidades técnicas e soft skills para colaborar em equipes e projetos desafiadores.",
    "Software Engineering student (Unicesumar) since 2024, driven to learn more and support people around me. I see software beyond code: a tool to solve real problems and create positive impact. I focus on growing technical and soft skills to collaborate in challenging projects.",
    "Étudiant en génie logiciel (Unicesumar) depuis 2024, motivé à apprendre et à aider les gens autour de moi. Pour moi, le logiciel dépasse le code : c'est un outil pour résoudre des problèmes réels et générer un impact positif. Je cherche à développer mes compétences techniques et humaines pour collaborer sur des projets exigeants.",
);

const RATINGS: &[SkillRating] = &[
    SkillRating { name: "React / Next.js", level: 90 },
    SkillRating { name: "TypeScript", level: 88 },
    SkillRating { name: "Node.js / APIs", level: 82 },
    SkillRating { name: "UI / UX Systems", level: 80 },
    SkillRating { name: "Flutter / Dart", level: 45 },
    SkillRating { name: "Testes e Qualidade", level: 76 },
    SkillRating { name: "DevOps básico", level: 68 },
];

// Names missing here are technology names shared across locales.
const RATING_NAMES: &[(&str, LocalizedText)] = &[
    (
        "Testes e Qualidade",
        tr!("Testes e Qualidade", "Testing & QA", "Tests et Qualité"),
    ),
    (
        "DevOps básico",
        tr!("DevOps básico", "Basic DevOps", "DevOps de base"),
    ),
];

const QUALIFICATIONS: &[Qualification] = &[
    Qualification {
        title: same("Front-end"),
        description: tr!(
            "Proficiente em HTML, CSS, JavaScript, TypeScript, Tailwind CSS e React. Criação de interfaces responsivas e interativas com foco em UX e performance.",
            "Proficient in HTML, CSS, JavaScript, TypeScript, Tailwind CSS, and React. Builds responsive, interactive UIs with focus on UX and performance.",
            "Compétent en HTML, CSS, JavaScript, TypeScript, Tailwind CSS et React. Création d'interfaces responsives et interactives avec un focus UX et performance.",
        ),
    },
    Qualification {
        title: same("Back-end"),
        description: tr!(
            "Conhecimento em Node.js e PHP (Laravel). Experiência em integrações, formulários e segurança, cobrindo etapas do ciclo de desenvolvimento.",
            "Knowledge in Node.js and PHP (Laravel). Experience with integrations, forms, and security, covering multiple stages of the development cycle.",
            "Connaissances en Node.js et PHP (Laravel). Expérience en intégrations, formulaires et sécurité, couvrant plusieurs étapes du cycle de développement.",
        ),
    },
    Qualification {
        title: same("Flutter / Dart"),
        description: tr!(
            "Explorando Flutter/Dart para experiências mobile, prototipando telas e entendendo o fluxo de estado e navegação.",
            "Exploring Flutter/Dart for mobile experiences, prototyping screens and understanding state flow and navigation.",
            "Exploration de Flutter/Dart pour le mobile, prototypage d'écrans et compréhension des flux d'état et de navigation.",
        ),
    },
    Qualification {
        title: tr!(
            "Controle de versão e colaboração",
            "Version control & collaboration",
            "Gestion de versions et collaboration",
        ),
        description: tr!(
            "Experiência com Git e metodologias ágeis, facilitando colaboração efetiva em equipes de desenvolvimento.",
            "Experience with Git and agile methodologies, enabling effective collaboration in development teams.",
            "Expérience avec Git et les méthodologies agiles, pour une collaboration efficace en équipe de développement.",
        ),
    },
    Qualification {
        title: tr!(
            "Comunicação global",
            "Global communication",
            "Communication internationale",
        ),
        description: tr!(
            "Certificado em curso de inglês, permitindo colaboração eficiente em projetos internacionais.",
            "Certified English course, enabling efficient collaboration in international projects.",
            "Certificat d'anglais, permettant une collaboration efficace sur des projets internationaux.",
        ),
    },
];

const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: tr!(
            "Desenvolvedor Front-end (Startup)",
            "Front-end Developer (Startup)",
            "Développeur Front-end (Startup)",
        ),
        period: tr!("7 meses", "7 months", "7 mois"),
        description: tr!(
            "Desenvolvimento de sites, manutenção e correção de bugs em interfaces. Também atuei com PHP/Laravel em formulários e validação de usuários, ampliando a visão de back-end.",
            "Built websites, maintained and fixed UI bugs. Also worked with PHP/Laravel on forms and user validation, expanding back-end understanding.",
            "Création de sites, maintenance et correction de bugs d'interface. Travail avec PHP/Laravel sur formulaires et validation d'utilisateurs, élargissant la vision back-end.",
        ),
    },
    ExperienceEntry {
        role: tr!(
            "Desenvolvedor Front-end — BuskTraffic",
            "Front-end Developer — BuskTraffic",
            "Développeur Front-end — BuskTraffic",
        ),
        period: tr!(
            "Fev/2025 - Set/2025",
            "Feb/2025 - Sep/2025",
            "Févr./2025 - Sept./2025",
        ),
        description: tr!(
            "Front-end com HTML, CSS, JavaScript, React. Apoio em design e ocasionalmente back-end com PHP/Laravel. Foquei em estruturar código e criar interfaces alinhadas ao design.",
            "Front-end with HTML, CSS, JavaScript, React. Supported design and occasionally back-end with PHP/Laravel. Focused on structured code and design-aligned interfaces.",
            "Front-end avec HTML, CSS, JavaScript, React. Support design et parfois back-end avec PHP/Laravel. Accent sur un code structuré et des interfaces alignées au design.",
        ),
    },
    ExperienceEntry {
        role: tr!(
            "Desenvolvedor Web/App — 360erp",
            "Web/App Developer — 360erp",
            "Développeur Web/App — 360erp",
        ),
        period: tr!(
            "Set/2025 - Atual",
            "Sep/2025 - Present",
            "Sept./2025 - Aujourd'hui",
        ),
        description: tr!(
            "Atuação em sistema interno e app da 360erp. ERP integra áreas como finanças, estoque, vendas e operações; trabalho em fluxos e telas que conectam esses módulos, garantindo consistência e usabilidade.",
            "Working on 360erp's internal system and app. ERP ties finance, inventory, sales, and operations; I build flows and screens connecting these modules, ensuring consistency and usability.",
            "Travail sur le système interne et l'app de 360erp. L'ERP relie finance, stock, ventes et opérations ; je conçois des flux et écrans reliant ces modules avec cohérence et ergonomie.",
        ),
    },
];

const SHOWCASE: &[ShowcaseSkill] = &[
    ShowcaseSkill {
        id: "htmlcss",
        category: SkillCategory::Front,
        label: same("HTML5 & CSS3"),
        description: tr!(
            "Base para construção de sites. Estruturas semânticas com HTML e CSS moderno, incluindo responsividade.",
            "Foundation for building sites. Semantic HTML and modern CSS, including responsive design.",
            "Base pour créer des sites. HTML sémantique et CSS moderne, y compris le responsive.",
        ),
        image: Some("/assets/skills/htmlcss.png"),
    },
    ShowcaseSkill {
        id: "react",
        category: SkillCategory::Front,
        label: same("React"),
        description: tr!(
            "Componentes, hooks e integração com APIs para interfaces reativas. Foco em estado, roteamento e boas práticas.",
            "Components, hooks, and API integration for reactive UIs. Focus on state, routing, and best practices.",
            "Composants, hooks et intégration d'API pour des UI réactives. Focus sur état, routage et bonnes pratiques.",
        ),
        image: Some("/assets/skills/react.png"),
    },
    ShowcaseSkill {
        id: "tailwind",
        category: SkillCategory::Front,
        label: same("Tailwind CSS"),
        description: tr!(
            "CSS utilitário para criar layouts rápidos, acessíveis e responsivos direto no JSX.",
            "Utility-first CSS for fast, accessible, responsive layouts directly in JSX.",
            "CSS utilitaire pour des mises en page rapides, accessibles et responsives directement dans le JSX.",
        ),
        image: Some("/assets/skills/tailwind.png"),
    },
    ShowcaseSkill {
        id: "bootstrap",
        category: SkillCategory::Front,
        label: same("Bootstrap"),
        description: tr!(
            "Componentes prontos e grid responsivo para entregar telas com agilidade.",
            "Ready-made components and responsive grid to deliver screens quickly.",
            "Composants prêts à l'emploi et grille responsive pour livrer rapidement.",
        ),
        image: Some("/assets/skills/bootstrap.png"),
    },
    ShowcaseSkill {
        id: "antd",
        category: SkillCategory::Front,
        label: same("Ant Design"),
        description: tr!(
            "Biblioteca React corporativa com design consistente e componentes ricos.",
            "Enterprise React library with consistent design and rich components.",
            "Bibliothèque React d'entreprise avec design cohérent et composants riches.",
        ),
        image: None,
    },
    ShowcaseSkill {
        id: "javascript",
        category: SkillCategory::Back,
        label: same("JavaScript (ES6+)"),
        description: tr!(
            "ES6+, async/await e DOM. Base para front e back com foco em legibilidade.",
            "ES6+, async/await, DOM. Core for front and back with readability focus.",
            "ES6+, async/await, DOM. Base pour front et back avec focus lisibilité.",
        ),
        image: Some("/assets/skills/js.png"),
    },
    ShowcaseSkill {
        id: "node",
        category: SkillCategory::Back,
        label: same("Node.js"),
        description: tr!(
            "APIs REST com Express, integração com bancos e middlewares de autenticação/validação.",
            "REST APIs with Express, database integration, and auth/validation middleware.",
            "APIs REST avec Express, intégration BD, middlewares d'authentification/validation.",
        ),
        image: Some("/assets/skills/node.png"),
    },
    ShowcaseSkill {
        id: "laravel",
        category: SkillCategory::Back,
        label: same("Laravel (PHP)"),
        description: tr!(
            "Rotas, autenticação, formulários e segurança. Experiência full-cycle em PHP/Laravel.",
            "Routes, auth, forms, and security. Full-cycle experience in PHP/Laravel.",
            "Routes, auth, formulaires et sécurité. Expérience full-cycle en PHP/Laravel.",
        ),
        image: Some("/assets/skills/laravel.png"),
    },
    ShowcaseSkill {
        id: "next",
        category: SkillCategory::Back,
        label: same("Next.js"),
        description: tr!(
            "SSR/SSG, otimização de performance e roteamento para apps modernas em React.",
            "SSR/SSG, performance optimizations, and routing for modern React apps.",
            "SSR/SSG, optimisations de performance et routage pour apps React modernes.",
        ),
        image: Some("/assets/skills/next.png"),
    },
    ShowcaseSkill {
        id: "flutter",
        category: SkillCategory::Other,
        label: same("Flutter / Dart"),
        description: tr!(
            "Explorando apps mobile com widgets, navegação e estado básico.",
            "Exploring mobile apps with widgets, navigation, and basic state.",
            "Exploration d'apps mobiles avec widgets, navigation et état basique.",
        ),
        image: Some("/assets/skills/flutter.png"),
    },
    ShowcaseSkill {
        id: "git",
        category: SkillCategory::Other,
        label: same("Git & GitHub"),
        description: tr!(
            "Fluxo com branches, PRs e versionamento para times ágeis.",
            "Workflow with branches, PRs, and versioning for agile teams.",
            "Flux avec branches, PRs et versioning pour équipes agiles.",
        ),
        image: None,
    },
    ShowcaseSkill {
        id: "figma",
        category: SkillCategory::Other,
        label: tr!("Figma (básico)", "Figma (basic)", "Figma (basique)"),
        description: tr!(
            "Apoio em design, leitura de layouts e colaboração em protótipos.",
            "Design support, reading layouts, and collaborating on prototypes.",
            "Support design, lecture de maquettes et collaboration sur prototypes.",
        ),
        image: Some("/assets/skills/figma.png"),
    },
    ShowcaseSkill {
        id: "postman",
        category: SkillCategory::Other,
        label: same("Postman"),
        description: tr!(
            "Teste e documentação de APIs, collections e ambientes para validação rápida.",
            "API testing and documentation, collections and environments for quick validation.",
            "Tests et documentation d'API, collections et environnements pour validation rapide.",
        ),
        image: Some("/assets/skills/postman.png"),
    },
    ShowcaseSkill {
        id: "vercel",
        category: SkillCategory::Other,
        label: same("Vercel"),
        description: tr!(
            "Deploy rápido de apps front-end/Next.js com pré-visualizações e CI simplificado.",
            "Fast deploy for front-end/Next.js apps with previews and simplified CI.",
            "Déploiement rapide pour apps front-end/Next.js avec prévisualisations et CI simplifiée.",
        ),
        image: Some("/assets/skills/vercel.png"),
    },
];

const SYSTEM_AND_LANDING: LocalizedText = tr!(
    "Sistema e Landing Page",
    "System and Landing Page",
    "Système et Landing Page",
);

const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: same("LunarBot.io"),
        subtitle: tr!(
            "Dashboard Administrativo e Landing Page",
            "Admin Dashboard and Landing Page",
            "Tableau de bord Administratif et Landing Page",
        ),
        description: tr!(
            "Sistema de gerenciamento para bot do Telegram com interface intuitiva. Controle de usuários, mensagens, comandos, grupos e monitoramento de estatísticas, configurações e logs. Foco em usabilidade e eficiência operacional.",
            "Telegram bot management system with intuitive interface. User, message, command, and group control, plus monitoring of stats, settings, and logs. Focused on usability and operational efficiency.",
            "Système de gestion pour bot Telegram avec interface intuitive. Contrôle des utilisateurs, messages, commandes, groupes et suivi des statistiques, configurations et logs. Centré sur l'utilisabilité et l'efficacité opérationnelle.",
        ),
        category: SYSTEM_AND_LANDING,
        skills: &[
            "HTML5 & CSS3",
            "Bootstrap",
            "JavaScript",
            "Laravel (PHP)",
            "Postman",
            "Notion",
            "Figma",
        ],
        live_link: "https://lunarbot.com.br/",
        figma_link: Some(
            "https://www.figma.com/design/0gHgezIDrlEidd1cYQymAY/lunarbot?node-id=8-134&t=9CtnBgcuyuGNeN0I-0",
        ),
        image: Some("/assets/projects/lunarbot.png"),
        theme_color: "#8b5cf6",
    },
    Project {
        id: 2,
        title: same("Aprova Legal"),
        subtitle: tr!(
            "Sistema de Seguro Imobiliário",
            "Real Estate Insurance System",
            "Système d'assurance immobilière",
        ),
        description: tr!(
            "Sistema de seguro imobiliário com interface intuitiva e funcionalidades avançadas: clientes, apólices, sinistros, relatórios e mais.",
            "Real estate insurance system with intuitive interface and advanced features: customers, policies, claims, reports, and more.",
            "Système d'assurance immobilière avec interface intuitive et fonctionnalités avancées : clients, polices, sinistres, rapports et plus.",
        ),
        category: tr!("Sistema", "System", "Système"),
        skills: &[
            "HTML5 & CSS3",
            "Bootstrap",
            "JavaScript",
            "Laravel (PHP)",
            "Figma",
        ],
        live_link: "#",
        figma_link: Some(
            "https://www.figma.com/design/3RdM5hEbL9989k5AhNRTIe/Aprova-Legal?t=xAN2eKZc5v8n3KAc-0",
        ),
        image: Some("/assets/projects/aprova-legal.png"),
        theme_color: "#22c55e",
    },
    Project {
        id: 3,
        title: tr!(
            "Haber Contabilidade",
            "Haber Accounting",
            "Haber Comptabilité",
        ),
        subtitle: tr!(
            "Landing Page profissional e micro-sistema contábil",
            "Professional landing page and accounting mini-system",
            "Landing Page professionnelle et micro-système comptable",
        ),
        description: tr!(
            "Landing page focada em captação de leads para serviços contábeis e micro-sistema de controle com usabilidade e eficiência.",
            "Landing page focused on lead generation for accounting services and a control mini-system with usability and efficiency.",
            "Landing page orientée génération de leads pour services comptables et micro-système de contrôle axé sur l'utilisabilité et l'efficacité.",
        ),
        category: SYSTEM_AND_LANDING,
        skills: &["React", "Tailwind CSS", "Vercel"],
        live_link: "https://haber.vercel.app",
        figma_link: None,
        image: Some("/assets/projects/haber.png"),
        theme_color: "#0ea5e9",
    },
];

const TECH_LOGOS: &[(&str, &str)] = &[
    ("React", "/assets/skills/react.png"),
    ("Next.js", "/assets/skills/next.png"),
    ("TypeScript", "/assets/skills/ts.png"),
    ("Tailwind CSS", "/assets/skills/tailwind.png"),
    ("Figma", "/assets/skills/figma.png"),
    ("HTML5 & CSS3", "/assets/skills/htmlcss.png"),
    ("Bootstrap", "/assets/skills/bootstrap.png"),
    ("JavaScript", "/assets/skills/js.png"),
    ("Laravel (PHP)", "/assets/skills/laravel.png"),
    ("Postman", "/assets/skills/postman.png"),
    ("Notion", "/assets/skills/notion.png"),
    ("Node.js", "/assets/skills/node.png"),
    ("Vercel", "/assets/skills/vercel.png"),
    ("Flutter", "/assets/skills/flutter.png"),
    ("Flutter / Dart", "/assets/skills/flutter.png"),
    ("Dart", "/assets/skills/dart.png"),
    ("MUI", "/assets/skills/mui.png"),
    ("Material UI", "/assets/skills/mui.png"),
];

const CONTACT: ContactCopy = ContactCopy {
    title: tr!(
        "Vamos construir algo juntos?",
        "Let's build something together?",
        "On construit quelque chose ensemble ?",
    ),
    subtitle: tr!(
        "Pronto para oportunidades, freelas e colaborações.",
        "Open to opportunities, freelancing, and collaborations.",
        "Disponible pour opportunités, freelances et collaborations.",
    ),
};

const SOCIALS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/luiz-rodrigues-372866256/",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Luizrodrlguesz",
    },
    SocialLink {
        label: "E-mail",
        href: "mailto:luizh4321@gmail.com",
    },
    SocialLink {
        label: "WhatsApp",
        href: "https://wa.me/5541988657834",
    },
];

const CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        kind: ContactKind::Email,
        info: "luizh4321@gmail.com",
        href: "mailto:luizh4321@gmail.com",
    },
    ContactChannel {
        kind: ContactKind::Github,
        info: "@Luizrodrlguesz",
        href: "https://github.com/Luizrodrlguesz",
    },
    ContactChannel {
        kind: ContactKind::Linkedin,
        info: "Luiz Rodrigues",
        href: "https://www.linkedin.com/in/luiz-rodrigues-372866256/",
    },
];
