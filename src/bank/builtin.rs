//! Built-in question catalog
//!
//! Ten security domains, enough questions that every scheduled boss
//! checkpoint is reachable in a full-bank session.

use super::{BOSS_CATEGORY, BossSchedule, Question, QuestionBank};

/// The built-in catalog
pub fn question_bank() -> QuestionBank {
    let q = Question::new;
    QuestionBank::new(vec![
        // OSINT
        q("OSINT", "What tool can you use to find a domain's WHOIS information?", "whois"),
        q("OSINT", "Which search engine indexes internet-connected devices and their banners?", "Shodan"),
        q("OSINT", "What does OSINT stand for?", "Open Source Intelligence"),
        q("OSINT", "Which Google search operator restricts results to a single domain?", "site"),
        q("OSINT", "Which tool harvests emails and subdomains from public sources?", "theHarvester"),
        q("OSINT", "Which web archive lets you view historical snapshots of a page?", "Wayback Machine"),
        q("OSINT", "What file on a web server tells crawlers which paths to skip?", "robots.txt"),
        // Networking
        q("Networking", "What port does SSH use by default?", "22"),
        q("Networking", "What port does HTTPS use by default?", "443"),
        q("Networking", "Which protocol translates domain names to IP addresses?", "DNS"),
        q("Networking", "Which protocol maps IP addresses to MAC addresses on a local network?", "ARP"),
        q("Networking", "What does VPN stand for?", "Virtual Private Network"),
        q("Networking", "How many packets are exchanged in a TCP handshake?", "3"),
        q("Networking", "Which tool is the standard for capturing and inspecting network packets?", "Wireshark"),
        q("Networking", "Which port scanner is famous for its -sS SYN scan?", "nmap"),
        // Web Security
        q("Web Security", "Which vulnerability lets attackers run arbitrary database queries through user input?", "SQL injection"),
        q("Web Security", "What does CSRF stand for?", "Cross Site Request Forgery"),
        q("Web Security", "Which response header tells browsers to only ever connect over HTTPS?", "Strict-Transport-Security"),
        q("Web Security", "Which organization publishes the Top 10 list of web application risks?", "OWASP"),
        q("Web Security", "XSS that is saved on the server and served to later visitors is called what?", "stored"),
        q("Web Security", "Which cookie attribute stops JavaScript from reading a cookie?", "HttpOnly"),
        q("Web Security", "Which attack walks up the filesystem using ../ sequences?", "directory traversal"),
        q("Web Security", "Which vulnerability tricks the server into fetching attacker-chosen URLs?", "SSRF"),
        // Cryptography
        q("Cryptography", "Which SHA-2 family hash produces a 256-bit digest?", "SHA-256"),
        q("Cryptography", "What does AES stand for?", "Advanced Encryption Standard"),
        q("Cryptography", "Is RSA a symmetric or asymmetric algorithm?", "asymmetric"),
        q("Cryptography", "What random value is added to a password before hashing to defeat rainbow tables?", "salt"),
        q("Cryptography", "What does TLS stand for?", "Transport Layer Security"),
        q("Cryptography", "Which key of a key pair is used to verify a digital signature?", "public key"),
        q("Cryptography", "Which classical cipher shifts every letter by a fixed amount?", "Caesar cipher"),
        // Incident Response
        q("Incident Response", "What does SIEM stand for?", "Security Information and Event Management"),
        q("Incident Response", "In the NIST lifecycle, which phase follows Detection and Analysis?", "Containment"),
        q("Incident Response", "What is the step-by-step document for handling one incident type called?", "playbook"),
        q("Incident Response", "What term describes the time between compromise and detection?", "dwell time"),
        q("Incident Response", "What does EDR stand for?", "Endpoint Detection and Response"),
        q("Incident Response", "Which team defends during a security exercise?", "blue team"),
        q("Incident Response", "Which team simulates the attackers during a security exercise?", "red team"),
        // Malware Analysis
        q("Malware Analysis", "Which malware encrypts files and demands payment?", "ransomware"),
        q("Malware Analysis", "Which malware disguises itself as legitimate software?", "trojan"),
        q("Malware Analysis", "What is self-replicating malware that needs no host program called?", "worm"),
        q("Malware Analysis", "What isolated environment is used to safely detonate a sample?", "sandbox"),
        q("Malware Analysis", "Examining a sample without executing it is called what kind of analysis?", "static"),
        q("Malware Analysis", "Which malware hides its presence by subverting the operating system?", "rootkit"),
        q("Malware Analysis", "What is a network of compromised machines under one operator called?", "botnet"),
        // Digital Forensics
        q("Digital Forensics", "What is the documented trail of who handled evidence called?", "chain of custody"),
        q("Digital Forensics", "What is a bit-for-bit copy of a storage device called?", "disk image"),
        q("Digital Forensics", "Which principle says to collect the most short-lived evidence first?", "order of volatility"),
        q("Digital Forensics", "Which NTFS structure tracks every file on a volume?", "Master File Table"),
        q("Digital Forensics", "RAM captured from a live system is called a what?", "memory dump"),
        q("Digital Forensics", "Which device prevents writes to a drive during acquisition?", "write blocker"),
        q("Digital Forensics", "Which open-source framework analyzes memory dumps?", "Volatility"),
        // Cloud Security
        q("Cloud Security", "What does IAM stand for?", "Identity and Access Management"),
        q("Cloud Security", "Which AWS storage service is notorious for misconfigured public buckets?", "S3"),
        q("Cloud Security", "Granting only the permissions a task needs is the principle of what?", "least privilege"),
        q("Cloud Security", "What does CSPM stand for?", "Cloud Security Posture Management"),
        q("Cloud Security", "Which service model hands you raw virtual machines to manage?", "IaaS"),
        q("Cloud Security", "Which XML-based standard federates single sign-on between providers?", "SAML"),
        q("Cloud Security", "Running code without managing any servers is called what?", "serverless"),
        // Social Engineering
        q("Social Engineering", "Which attack sends fraudulent emails to steal credentials?", "phishing"),
        q("Social Engineering", "What is phishing over SMS called?", "smishing"),
        q("Social Engineering", "What is phishing aimed at senior executives called?", "whaling"),
        q("Social Engineering", "What is phishing over voice calls called?", "vishing"),
        q("Social Engineering", "Following an authorized person through a secure door is called what?", "tailgating"),
        q("Social Engineering", "Inventing a believable scenario to extract information is called what?", "pretexting"),
        q("Social Engineering", "Leaving infected USB drives around for victims to find is called what?", "baiting"),
        // Threat Intelligence
        q("Threat Intelligence", "What does IOC stand for?", "Indicator of Compromise"),
        q("Threat Intelligence", "What does APT stand for?", "Advanced Persistent Threat"),
        q("Threat Intelligence", "Which Lockheed Martin model breaks an intrusion into seven stages?", "Cyber Kill Chain"),
        q("Threat Intelligence", "What does TTP stand for?", "Tactics Techniques and Procedures"),
        q("Threat Intelligence", "Which structured language serializes threat intelligence for exchange?", "STIX"),
        q("Threat Intelligence", "Which protocol transports STIX threat feeds?", "TAXII"),
        q("Threat Intelligence", "Which pyramid ranks indicators by how much losing them hurts the attacker?", "Pyramid of Pain"),
    ])
}

/// The default boss schedule: chapters 3, 5 and 7
pub fn boss_schedule() -> BossSchedule {
    BossSchedule::new([
        (
            3,
            Question::new(
                BOSS_CATEGORY,
                "Final question of Chapter 3: What does XSS stand for?",
                "Cross Site Scripting",
            ),
        ),
        (
            5,
            Question::new(
                BOSS_CATEGORY,
                "Chapter 5 Boss: Which framework classifies attacker techniques and tactics?",
                "MITRE ATT&CK",
            ),
        ),
        (
            7,
            Question::new(
                BOSS_CATEGORY,
                "Final Showdown: What is the first step in the NIST incident response lifecycle?",
                "Preparation",
            ),
        ),
    ])
}
